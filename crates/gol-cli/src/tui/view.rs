use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app::{CELL_WIDTH, TuiApp};

const HELP_LINES: [&str; 9] = [
    "  Enter       Start / stop",
    "  Up          Slower",
    "  Down        Faster",
    "  n           Step one generation (paused)",
    "  r           Reset",
    "  Click       Toggle a cell",
    "  F1 / ?      Toggle this help",
    "  q / Esc     Quit",
    "  Ctrl+C      Force quit",
];

pub fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Grid
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_grid(frame, app, chunks[0]);
    draw_status_bar(frame, app, chunks[1]);

    app.help_area = app
        .engine
        .help_visible()
        .then(|| draw_help_popup(frame));
}

fn draw_grid(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let grid = app.engine.grid();
    let n = u16::try_from(grid.dimension()).unwrap_or(u16::MAX);
    let outer = Rect {
        width: n.saturating_mul(CELL_WIDTH).saturating_add(2).min(area.width),
        height: n.saturating_add(2).min(area.height),
        ..area
    };

    let lines: Vec<Line> = grid
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&alive| {
                        if alive {
                            Span::styled("██", Style::default().fg(Color::Green))
                        } else {
                            Span::styled("· ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let block = Block::default()
        .title(" Game of Life ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    app.grid_area = block.inner(outer);
    frame.render_widget(Paragraph::new(lines).block(block), outer);
}

fn draw_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let engine = &app.engine;
    let state = if engine.is_running() {
        "running"
    } else {
        "paused"
    };
    let status = format!(
        "{} | gen {} | {} alive | {state} | Enter:run Up/Down:speed n:step r:reset ?:help q:quit",
        engine.status_line(),
        engine.generation(),
        engine.grid().population(),
    );
    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

fn draw_help_popup(frame: &mut Frame) -> Rect {
    let area = centered_rect(50, 50, frame.area());

    let mut help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
    ];
    help_text.extend(HELP_LINES.iter().map(|line| Line::from(*line)));

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
    area
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gol_core::{Command, Engine, LifeConfig};
    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    fn render(app: &mut TuiApp) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
    }

    #[test]
    fn grid_area_sits_inside_border() {
        let engine = Engine::new(LifeConfig::default().with_dimension(8)).unwrap();
        let mut app = TuiApp::new(engine);
        render(&mut app);
        assert_eq!(app.grid_area, Rect::new(1, 1, 16, 8));
    }

    #[test]
    fn large_grid_is_clipped_to_screen() {
        let mut app = TuiApp::new(Engine::new(LifeConfig::default()).unwrap());
        render(&mut app);
        assert_eq!(app.grid_area, Rect::new(1, 1, 58, 17));
    }

    fn click(app: &mut TuiApp, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    #[test]
    fn status_bar_click_leaves_grid_alone() {
        let config = LifeConfig::default().with_help(false);
        let mut app = TuiApp::new(Engine::new(config).unwrap());
        render(&mut app);
        let before = app.engine.grid().clone();
        click(&mut app, 10, 19);
        click(&mut app, 0, 5);
        assert_eq!(app.engine.grid(), &before);
    }

    #[test]
    fn help_popup_swallows_clicks() {
        let mut app = TuiApp::new(Engine::new(LifeConfig::default()).unwrap());
        render(&mut app);
        let help = app.help_area.unwrap();
        let before = app.engine.grid().clone();
        click(&mut app, help.x + 2, help.y + 2);
        assert_eq!(app.engine.grid(), &before);

        app.engine.apply(Command::ToggleHelp);
        render(&mut app);
        assert_eq!(app.help_area, None);
        click(&mut app, help.x + 2, help.y + 2);
        assert_ne!(app.engine.grid(), &before);
    }

    #[test]
    fn live_cell_is_drawn_at_its_grid_area_position() {
        let config = LifeConfig::default().with_dimension(6).with_help(false);
        let mut app = TuiApp::new(Engine::new(config).unwrap());
        app.engine.apply(Command::ToggleCell { row: 1, col: 2 });
        let terminal = render(&mut app);
        let buffer = terminal.backend().buffer();
        // Column 1 + 2 cells * 2 columns, row 1 + 1.
        assert_eq!(buffer[(5, 2)].symbol(), "█");
        assert_eq!(buffer[(1, 1)].symbol(), "·");
    }
}
