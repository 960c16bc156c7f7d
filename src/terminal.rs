use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;

use lifeboard::camera::Camera;
use lifeboard::color::Rgb565;
use lifeboard::render::PixelSink;

/// The terminal as a display: a braille camera flushed through crossterm, in the color of the live
/// cells.
///
/// Whatever was last put on screen is remembered so it can be drawn again after the terminal wipes
/// it. When built with [`Terminal::enter`], raw mode and the alternate screen are left on drop.
pub struct Terminal<W: Write = Stdout> {
    out: W,
    camera: Camera,

    /// Text shown in place of the board, if any
    splash: Option<String>,

    /// Line under the board
    status: Option<String>,

    raw: bool,
}

impl Terminal<Stdout> {
    /// Take over the terminal for a `w` by `h` pixel display
    pub fn enter(w: usize, h: usize) -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;
        stdout.flush()?;

        let mut term = Self::with_writer(stdout, w, h);
        term.raw = true;

        Ok(term)
    }
}

impl<W: Write> Terminal<W> {
    /// A `w` by `h` pixel display printing to `out`, leaving terminal modes alone
    pub fn with_writer(out: W, w: usize, h: usize) -> Self {
        Self {
            out,
            camera: Camera::new(w, h),
            splash: None,
            status: None,
            raw: false,
        }
    }

    /// Wipe the screen and forget what was on it
    pub fn clear(&mut self) -> io::Result<()> {
        self.splash = None;
        self.status = None;

        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        self.out.flush()
    }

    /// Print some text in place of the board
    pub fn splash(&mut self, text: &str) -> io::Result<()> {
        self.splash = Some(text.to_string());
        self.status = None;

        self.redraw()
    }

    /// Print a line of text right under the board
    pub fn status(&mut self, line: &str) -> io::Result<()> {
        self.status = Some(line.to_string());

        self.print_status()?;
        self.out.flush()
    }

    /// Wipe the screen and put back the splash text, or the last shown frame and its status line
    pub fn redraw(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        match &self.splash {
            Some(text) => {
                for line in text.lines() {
                    queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
                }
            }
            None => {
                self.print_frame()?;
                self.print_status()?;
            }
        }

        self.out.flush()
    }

    fn print_frame(&mut self) -> io::Result<()> {
        let (r, g, b) = self.camera.color().to_rgb();

        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            style::SetForegroundColor(Color::Rgb { r, g, b }),
        )?;

        for line in self.camera.frame().lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(self.out, style::ResetColor)
    }

    fn print_status(&mut self) -> io::Result<()> {
        let Some(line) = &self.status else {
            return Ok(());
        };

        let below = self.camera.height().div_ceil(4) as u16;

        queue!(
            self.out,
            cursor::MoveTo(0, below),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(line),
        )
    }
}

impl<W: Write> PixelSink for Terminal<W> {
    fn draw_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        self.camera.draw_pixel(x, y, color);
    }

    fn show(&mut self) -> io::Result<()> {
        self.splash = None;
        self.camera.render();

        self.print_frame()?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        // Nothing left to report errors to
        let _ = queue!(self.out, style::ResetColor);

        if self.raw {
            let _ = queue!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
            let _ = self.out.flush();
            let _ = terminal::disable_raw_mode();
        } else {
            let _ = self.out.flush();
        }
    }
}
