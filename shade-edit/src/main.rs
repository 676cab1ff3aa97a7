//! Interactive editor and preview for shade-scale palettes.
//!
//! One screen: the palette's ramps as swatch bars, a detail pane for
//! the selected entry, a status line. Edits replace one field at a
//! time; `y` copies the CSS custom-property block to the clipboard.

mod swatch;

use crate::swatch::ShadeBar;
use anyhow::Error;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use log::{debug, warn};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use ratatui::{DefaultTerminal, Frame};
use shade_scale::{Palette, Rgb, SeedUpdate, ShadeRamp, css_block};
use std::fs;

/// Fallback for mix-ratio text that does not parse as a number.
const DEFAULT_MIX: f64 = 0.9;

fn main() -> Result<(), Error> {
    setup_logging()?;

    let terminal = ratatui::init();
    let r = run(terminal, App::new(Palette::default_set()));
    ratatui::restore();
    r
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<(), Error> {
    while !app.quit {
        terminal.draw(|frame| app.render(frame))?;
        if let Event::Key(key) = read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

/// The editable fields, in Left/Right cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Color,
    Shading,
    WhiteMix,
    BlackMix,
}

impl Field {
    const fn array() -> [Field; 5] {
        use Field::*;
        [Name, Color, Shading, WhiteMix, BlackMix]
    }

    const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Color => "Color",
            Field::Shading => "Shading",
            Field::WhiteMix => "White mix",
            Field::BlackMix => "Black mix",
        }
    }

    fn next(self) -> Self {
        let all = Field::array();
        let i = all.iter().position(|f| *f == self).expect("field");
        all[(i + 1) % all.len()]
    }

    fn prev(self) -> Self {
        let all = Field::array();
        let i = all.iter().position(|f| *f == self).expect("field");
        all[(i + all.len() - 1) % all.len()]
    }
}

#[derive(Debug)]
struct App {
    palette: Palette,
    selected: usize,
    field: Field,
    /// Text buffer while a field edit is open.
    edit: Option<String>,
    status: String,
    quit: bool,
}

impl App {
    fn new(palette: Palette) -> Self {
        Self {
            palette,
            selected: 0,
            field: Field::Name,
            edit: None,
            status: "Enter edit · Space shading · y copy CSS · q quit".into(),
            quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        if self.edit.is_some() {
            self.handle_edit_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.palette.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Left => self.field = self.field.prev(),
            KeyCode::Right => self.field = self.field.next(),
            KeyCode::Char(' ') => self.cycle_shading(),
            KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('y') => self.copy_css(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buf) = &mut self.edit else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.edit = None;
                self.status = "edit cancelled".into();
            }
            KeyCode::Enter => {
                let text = self.edit.take().expect("edit");
                self.commit_edit(text);
            }
            KeyCode::Backspace => {
                buf.pop();
            }
            KeyCode::Char(c) => buf.push(c),
            _ => {}
        }
    }

    fn entry(&self) -> &shade_scale::SeedColor {
        &self.palette.entries()[self.selected]
    }

    fn begin_edit(&mut self) {
        // shading has no text form, Enter just cycles it
        if self.field == Field::Shading {
            self.cycle_shading();
            return;
        }
        let entry = self.entry();
        let buf = match self.field {
            Field::Name => entry.name.clone(),
            Field::Color => entry.color.to_string(),
            Field::WhiteMix => format!("{}", entry.white_mix),
            Field::BlackMix => format!("{}", entry.black_mix),
            Field::Shading => unreachable!(),
        };
        self.edit = Some(buf);
        self.status = format!("editing {}", self.field.label());
    }

    fn cycle_shading(&mut self) {
        let next = self.entry().shading.next();
        self.apply(SeedUpdate::Shading(next));
        self.status = format!("shading: {}", next);
    }

    /// Commits an edit buffer. Malformed color text keeps the entry's
    /// previous color; non-numeric ratio text falls back to 0.9.
    /// Both fallbacks are logged, never silently written.
    fn commit_edit(&mut self, text: String) {
        let update = match self.field {
            Field::Name => {
                self.status = format!("name: {}", text);
                SeedUpdate::Name(text)
            }
            Field::Color => match text.parse::<Rgb>() {
                Ok(color) => {
                    self.status = format!("color: {}", color);
                    SeedUpdate::Color(color)
                }
                Err(e) => {
                    let kept = self.entry().color;
                    warn!("{}, keeping {}", e, kept);
                    self.status = format!("invalid color {:?}, kept {}", text, kept);
                    SeedUpdate::Color(kept)
                }
            },
            Field::WhiteMix => SeedUpdate::WhiteMix(self.parse_ratio(&text)),
            Field::BlackMix => SeedUpdate::BlackMix(self.parse_ratio(&text)),
            Field::Shading => return,
        };
        self.apply(update);
    }

    fn parse_ratio(&mut self, text: &str) -> f64 {
        match parse_ratio(text) {
            Some(v) => {
                self.status = format!("{}: {}", self.field.label(), v);
                v
            }
            None => {
                warn!("ratio {:?} not numeric, using {}", text, DEFAULT_MIX);
                self.status = format!("{:?} not numeric, using {}", text, DEFAULT_MIX);
                DEFAULT_MIX
            }
        }
    }

    fn apply(&mut self, update: SeedUpdate) {
        match self.palette.update(self.selected, update) {
            Ok(palette) => self.palette = palette,
            Err(e) => {
                warn!("{}", e);
                self.status = e.to_string();
            }
        }
    }

    fn copy_css(&mut self) {
        let block = css_block(&self.palette);
        debug!("export:\n{}", block);
        match cli_clipboard::set_contents(block) {
            Ok(_) => {
                self.status = format!("{} declarations copied", self.palette.len() * 10);
            }
            Err(e) => {
                self.status = format!("clipboard failed: {}", e);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    fn render(&self, frame: &mut Frame<'_>) {
        let l0 = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(self.palette.len() as u16 + 2),
            Constraint::Min(13),
            Constraint::Length(1),
        ])
        .split(frame.area());

        Line::from("shade-edit").centered().bold().render(l0[0], frame.buffer_mut());
        self.render_entries(l0[1], frame);
        self.render_detail(l0[2], frame);
        self.render_status(l0[3], frame);
    }

    fn render_entries(&self, area: Rect, frame: &mut Frame<'_>) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Palette");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (i, seed) in self.palette.entries().iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            let cols = Layout::horizontal([Constraint::Length(12), Constraint::Fill(1)]).split(row);

            let marker = if i == self.selected { "▌" } else { " " };
            let name = Line::from(format!("{}{}", marker, seed.name));
            frame.render_widget(
                if i == self.selected { name.bold() } else { name },
                cols[0],
            );
            frame.render_widget(ShadeBar::new(ShadeRamp::generate(seed)), cols[1]);
        }
    }

    fn render_detail(&self, area: Rect, frame: &mut Frame<'_>) {
        let seed = self.entry();
        let ramp = ShadeRamp::generate(seed);

        let field = |f: Field, value: String| {
            let s = format!("{}: {}", f.label(), value);
            if f == self.field {
                Span::from(s).reversed()
            } else {
                Span::from(s)
            }
        };

        let mut lines = vec![
            Line::from(
                [
                    field(Field::Name, seed.name.clone()),
                    Span::from("  "),
                    field(Field::Color, seed.color.to_string()),
                    Span::from("  "),
                    field(Field::Shading, seed.shading.to_string()),
                    Span::from("  "),
                    field(Field::WhiteMix, format!("{}", seed.white_mix)),
                    Span::from("  "),
                    field(Field::BlackMix, format!("{}", seed.black_mix)),
                ]
                .to_vec(),
            ),
            Line::default(),
        ];
        for (i, shade) in ramp.shades().enumerate() {
            lines.push(Line::from(vec![
                Span::from("  ██  ").style(Style::new().fg(shade.into())),
                Span::from(format!("{}  {}  {}", i, shade, shade.to_hsl())),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!("Shades · {}", seed.name)),
            ),
            area,
        );
    }

    fn render_status(&self, area: Rect, frame: &mut Frame<'_>) {
        let line = match &self.edit {
            Some(buf) => Line::from(format!("{}: {}▏", self.field.label(), buf)).reversed(),
            None => Line::from(self.status.as_str()),
        };
        frame.render_widget(line, area);
    }
}

fn parse_ratio(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn setup_logging() -> Result<(), Error> {
    let log_file = "log.log";
    _ = fs::remove_file(log_file);
    fern::Dispatch::new()
        .format(|out, message, _record| {
            out.finish(format_args!("{}", message)) //
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}
