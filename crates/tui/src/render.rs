//! Panel rendering.
//!
//! Pure projection: every function takes the state and a target rect and
//! draws; nothing in here mutates the controller.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Cell, Chart, Clear, Dataset, GraphType, Paragraph, Row,
    Sparkline, Table, Wrap,
};

use kirana_app::{AppState, Mode, Operation, state::INITIAL_INSIGHT};
use kirana_inventory::StockStatus;

use crate::palette::Palette;
use crate::shell::Chrome;

/// Fixed weekly demand series behind the trend charts.
const DEMAND_TREND: [u64; 7] = [120, 150, 210, 180, 250, 320, 280];
const DAY_LABELS: [&str; 7] = ["M", "T", "W", "Th", "F", "S", "Su"];

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(frame: &mut Frame, state: &AppState, chrome: &Chrome) {
    let palette = Palette::for_theme(state.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let columns = Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).split(area);
    render_sidebar(frame, columns[0], state, chrome, palette);

    let main = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(columns[1]);
    render_header(frame, main[0], state, palette);

    let body = main[1];
    match state.mode {
        Mode::Dashboard => render_dashboard(frame, body, state, palette),
        Mode::Vision => render_vision(frame, body, state, chrome, palette),
        Mode::Strategy => render_strategy(frame, body, state, palette),
        Mode::Negotiator => render_negotiator(frame, body, state, palette),
        Mode::Marketing => render_marketing(frame, body, state, palette),
    }

    if chrome.show_logs {
        render_log_panel(frame, body, state, palette);
    }
    if state.is_processing() {
        render_processing_indicator(frame, area, chrome, palette);
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState, chrome: &Chrome, palette: Palette) {
    let mut lines: Vec<Line> = vec![
        Line::styled("KIRANA COPILOT", palette.highlight()),
        Line::styled("autonomous supply os", palette.dim()),
        Line::default(),
    ];

    for (index, mode) in Mode::ALL.iter().enumerate() {
        let label = format!("[{}] {}", index + 1, mode.label());
        let style = if state.mode == *mode {
            palette.highlight()
        } else {
            palette.base()
        };
        lines.push(Line::styled(label, style));
    }

    lines.push(Line::default());
    let logs_style = if chrome.show_logs {
        palette.highlight()
    } else {
        palette.dim()
    };
    lines.push(Line::styled("[l] Orchestration Log", logs_style));
    lines.push(Line::styled("[t] Theme", palette.dim()));
    lines.push(Line::styled("[g] Language", palette.dim()));
    lines.push(Line::styled("[q] Quit", palette.dim()));

    let sidebar = Paragraph::new(lines)
        .block(Block::bordered().border_style(palette.frame()))
        .style(palette.base());
    frame.render_widget(sidebar, area);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let location = match state.context.detected_state.as_deref() {
        Some(region) => format!("{}, {}", state.context.detected_city, region),
        None => state.context.detected_city.clone(),
    };
    let status = format!(
        "{} · Lang: {} · Theme: {}",
        location,
        state.context.language,
        state.theme.as_str()
    );

    let header = Paragraph::new(vec![
        Line::styled(state.mode.label().to_uppercase(), palette.highlight()),
        Line::styled(status, palette.dim()),
    ])
    .block(Block::bordered().border_style(palette.frame()));
    frame.render_widget(header, area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let rows = Layout::vertical([
        Constraint::Length(8),
        Constraint::Min(10),
        Constraint::Length(8),
    ])
    .split(area);

    render_insight(frame, rows[0], state, palette);

    let charts =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(rows[1]);
    render_stock_chart(frame, charts[0], state, palette);
    render_trend_sparkline(frame, charts[1], palette);

    render_inventory_table(frame, rows[2], state, palette);
}

fn render_insight(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut title = vec![Span::styled("Agentic Insights Engine", palette.highlight())];
    if state.is_in_flight(Operation::Insight) {
        title.push(Span::styled("  Processing...", palette.dim()));
    }

    let mut lines: Vec<Line> = Vec::new();
    for (index, text) in state.insight.lines().enumerate() {
        let style = if index == 0 && state.insight != INITIAL_INSIGHT {
            palette.highlight()
        } else {
            palette.base()
        };
        lines.push(Line::styled(text.to_string(), style));
    }
    if let Some(error) = state.error_for(Operation::Insight) {
        lines.push(Line::styled(format!("! {error}"), palette.warning()));
    }

    let insight = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(Line::from(title))
                .border_style(palette.frame()),
        );
    frame.render_widget(insight, area);
}

fn render_stock_chart(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut chart = BarChart::default()
        .block(
            Block::bordered()
                .title("Stock Reconciliation")
                .border_style(palette.frame()),
        )
        .bar_width(4)
        .bar_gap(1)
        .group_gap(2);

    for item in &state.inventory {
        let actual = Bar::default()
            .value(item.quantity.max(0) as u64)
            .style(palette.highlight());
        let target = Bar::default()
            .value(item.target_quantity.max(0) as u64)
            .style(palette.dim());
        let group = BarGroup::default()
            .label(Line::styled(short_name(&item.name), palette.dim()))
            .bars(&[actual, target]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

fn render_trend_sparkline(frame: &mut Frame, area: Rect, palette: Palette) {
    let spark = Sparkline::default()
        .block(
            Block::bordered()
                .title("Mandi Price Trends")
                .border_style(palette.frame()),
        )
        .data(DEMAND_TREND.iter().copied())
        .style(Style::default().fg(palette.accent));
    frame.render_widget(spark, area);
}

fn render_inventory_table(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let rows = state.inventory.iter().map(|item| {
        let status_style = match item.status {
            StockStatus::LowStock => palette.warning(),
            StockStatus::Overstock => palette.dim(),
            StockStatus::InStock => palette.base(),
        };
        Row::new(vec![
            Cell::from(item.name.clone()),
            Cell::from(format!("{}/{}", item.quantity, item.target_quantity)),
            Cell::from(Span::styled(item.status.as_str(), status_style)),
            Cell::from(item.category.clone()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Percentage(20),
        ],
    )
    .header(Row::new(vec!["Item", "Qty/Target", "Status", "Category"]).style(palette.dim()))
    .block(
        Block::bordered()
            .title("Shelf Snapshot")
            .border_style(palette.frame()),
    );
    frame.render_widget(table, area);
}

fn render_vision(frame: &mut Frame, area: Rect, state: &AppState, chrome: &Chrome, palette: Palette) {
    let mut lines = vec![
        Line::styled("MULTIMODAL AGENT AUDIT", palette.highlight()),
        Line::styled("Scan stocks via camera, video, or voice notes", palette.dim()),
        Line::default(),
        Line::styled("[u] Photo / Video Scan", palette.base()),
    ];

    if state.recording {
        lines.push(Line::styled("[r] Stop Recording  ● REC", palette.warning()));
    } else {
        lines.push(Line::styled("[r] Voice Audit", palette.base()));
    }

    if let Some(error) = state.error_for(Operation::Audit) {
        lines.push(Line::default());
        lines.push(Line::styled(format!("! {error}"), palette.warning()));
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title("Vision")
                .border_style(palette.frame()),
        );
    frame.render_widget(panel, area);

    if let Some(input) = &chrome.path_input {
        render_path_prompt(frame, area, input, palette);
    }
}

fn render_path_prompt(frame: &mut Frame, area: Rect, input: &str, palette: Palette) {
    let width = area.width.saturating_sub(8).min(70).max(20);
    let prompt_area = centered(area, width, 5);
    frame.render_widget(Clear, prompt_area);

    let prompt = Paragraph::new(vec![
        Line::styled("Path to media file:", palette.dim()),
        Line::styled(format!("{input}_"), palette.base()),
        Line::styled("Enter to submit · Esc to cancel", palette.dim()),
    ])
    .block(
        Block::bordered()
            .title("Select Media")
            .border_style(palette.highlight()),
    )
    .style(palette.base());
    frame.render_widget(prompt, prompt_area);
}

fn render_strategy(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let rows = Layout::vertical([Constraint::Min(8), Constraint::Length(12)]).split(area);

    render_projection_chart(frame, rows[0], palette);

    if state.forecasts.is_empty() {
        let mut lines = vec![
            Line::default(),
            Line::styled("[f] Trigger Predictive Engine", palette.dim()),
        ];
        if let Some(error) = state.error_for(Operation::Forecast) {
            lines.push(Line::styled(format!("! {error}"), palette.warning()));
        }
        let cta = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .title("Forecasts")
                .border_style(palette.frame()),
        );
        frame.render_widget(cta, rows[1]);
        return;
    }

    let card_width = 100 / state.forecasts.len() as u32;
    let constraints: Vec<Constraint> = state
        .forecasts
        .iter()
        .map(|_| Constraint::Percentage(card_width as u16))
        .collect();
    let cards = Layout::horizontal(constraints).split(rows[1]);

    for (forecast, card) in state.forecasts.iter().zip(cards.iter()) {
        let lines = vec![
            Line::styled(forecast.event.clone(), palette.highlight()),
            Line::styled(forecast.impact.clone(), palette.base()),
            Line::default(),
            Line::styled(format!("ADVISORY: {}", forecast.recommendation), palette.base()),
            Line::styled(
                format!("{} · {}", forecast.source, forecast.timeframe),
                palette.dim(),
            ),
        ];
        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered().border_style(palette.frame()),
        );
        frame.render_widget(widget, *card);
    }
}

fn render_projection_chart(frame: &mut Frame, area: Rect, palette: Palette) {
    let points: Vec<(f64, f64)> = DEMAND_TREND
        .iter()
        .enumerate()
        .map(|(index, value)| (index as f64, *value as f64))
        .collect();

    let dataset = Dataset::default()
        .name("demand")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(palette.accent))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::bordered()
                .title("Demand Projection")
                .border_style(palette.frame()),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, 6.0])
                .labels(DAY_LABELS.iter().map(|day| Line::styled(*day, palette.dim())))
                .style(palette.dim()),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 350.0])
                .labels(["0", "175", "350"].iter().map(|v| Line::styled(*v, palette.dim())))
                .style(palette.dim()),
        );
    frame.render_widget(chart, area);
}

fn render_negotiator(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    if state.offers.is_empty() {
        let mut lines = vec![
            Line::default(),
            Line::styled("[n] Dispatch Procurement Agents", palette.dim()),
        ];
        if let Some(error) = state.error_for(Operation::Negotiation) {
            lines.push(Line::styled(format!("! {error}"), palette.warning()));
        }
        let cta = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .title("Negotiator")
                .border_style(palette.frame()),
        );
        frame.render_widget(cta, area);
        return;
    }

    let rows_layout =
        Layout::vertical([Constraint::Length(3 + state.offers.len() as u16), Constraint::Min(6)])
            .split(area);

    let rows = state.offers.iter().map(|offer| {
        Row::new(vec![
            offer.supplier.clone(),
            offer.price.clone(),
            offer.delivery_time.clone(),
            offer.rating.clone(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Supplier", "Price", "Delivery", "Rating"]).style(palette.dim()))
    .block(
        Block::bordered()
            .title("Supplier Offers")
            .border_style(palette.frame()),
    );
    frame.render_widget(table, rows_layout[0]);

    if let Some(po) = &state.po_draft {
        let mut lines = vec![
            Line::styled(format!("To: {}", po.to), palette.highlight()),
            Line::styled(format!("Subject: {}", po.subject), palette.base()),
            Line::default(),
            Line::styled(po.body.clone(), palette.base()),
        ];
        for source in &po.sources {
            lines.push(Line::styled(format!("• {}", source.title), palette.dim()));
        }
        let draft = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title("Purchase Order Draft")
                .border_style(palette.frame()),
        );
        frame.render_widget(draft, rows_layout[1]);
    }
}

fn render_marketing(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    if state.campaigns.is_empty() {
        let mut lines = vec![
            Line::default(),
            Line::styled("[m] Draft Campaigns", palette.dim()),
        ];
        if let Some(error) = state.error_for(Operation::Marketing) {
            lines.push(Line::styled(format!("! {error}"), palette.warning()));
        }
        let cta = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .title("Marketing")
                .border_style(palette.frame()),
        );
        frame.render_widget(cta, area);
        return;
    }

    let constraints: Vec<Constraint> = state
        .campaigns
        .iter()
        .map(|_| Constraint::Percentage((100 / state.campaigns.len()) as u16))
        .collect();
    let cards = Layout::horizontal(constraints).split(area);

    for (campaign, card) in state.campaigns.iter().zip(cards.iter()) {
        let hashtags = campaign
            .hashtags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        let metrics = format!(
            "Reach {} · Clicks {} · Conversions {}",
            campaign.metrics.predicted_reach, campaign.metrics.clicks, campaign.metrics.conversions
        );

        let lines = vec![
            Line::styled(
                format!("{} · {:?}", campaign.platform.as_str(), campaign.status),
                palette.highlight(),
            ),
            Line::default(),
            Line::styled(campaign.caption.clone(), palette.base()),
            Line::styled(hashtags, Style::default().fg(palette.accent)),
            Line::styled(format!("→ {}", campaign.call_to_action), palette.base()),
            Line::default(),
            Line::styled(metrics, palette.dim()),
        ];
        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered().border_style(palette.frame()),
        );
        frame.render_widget(widget, *card);
    }
}

fn render_log_panel(frame: &mut Frame, body: Rect, state: &AppState, palette: Palette) {
    let width = body.width.min(46);
    let panel = Rect {
        x: body.right().saturating_sub(width),
        y: body.y,
        width,
        height: body.height,
    };
    frame.render_widget(Clear, panel);

    let block = Block::bordered()
        .title("Multi-Agent Reasoning Log")
        .border_style(palette.highlight())
        .style(palette.base());

    if state.logs.is_empty() {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::styled("Waiting for operations...", palette.dim()),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, panel);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for entry in state.logs.iter() {
        lines.push(Line::styled(
            format!("Agent: {}", entry.agent),
            palette.highlight(),
        ));
        lines.push(Line::styled(
            format!("  [ACTION] {}", entry.action),
            palette.base(),
        ));
        lines.push(Line::styled(
            format!("  [OBSERVATION] {}", entry.observation),
            Style::default().fg(palette.accent),
        ));
        lines.push(Line::styled(format!("  {}", entry.timestamp), palette.dim()));
        lines.push(Line::default());
    }

    let feed = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(feed, panel);
}

fn render_processing_indicator(frame: &mut Frame, area: Rect, chrome: &Chrome, palette: Palette) {
    let width = 30u16.min(area.width);
    let indicator = Rect {
        x: area.right().saturating_sub(width + 2),
        y: area.bottom().saturating_sub(4),
        width,
        height: 3,
    };
    frame.render_widget(Clear, indicator);

    let frame_index = (chrome.tick as usize) % SPINNER.len();
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(SPINNER[frame_index], palette.highlight()),
        Span::styled(" Orchestrating Agents...", palette.highlight()),
    ]))
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(palette.highlight()))
    .style(palette.base());
    frame.render_widget(widget, indicator);
}

fn short_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
