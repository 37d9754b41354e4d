//! Big-screen floor plan: every office on one floor, open areas drawn as desk grids.

use super::dashboard::{
    status_color, utilization_span, BRAND_ACCENT, BRAND_MUTED, HEADER_STYLE,
};
use crate::model::{Workstation, WorkstationStatus};
use crate::store::{FloorPlan, OfficePlan};
use crate::ui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 6;

pub fn draw_floor_plan(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(4)]).split(area);

    let Some((property, floors)) = app.floor_selection() else {
        frame.render_widget(
            Paragraph::new(" No properties ").block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    };

    let plan = app
        .current_floor()
        .and_then(|floor| app.store.floor_plan(&property.id, floor));

    let floor_tabs: Vec<Span> = floors
        .iter()
        .enumerate()
        .map(|(i, floor)| {
            let label = format!(" F{floor} ");
            if i == app.floor_index {
                Span::styled(label, HEADER_STYLE.add_modifier(Modifier::REVERSED))
            } else {
                Span::styled(label, Style::default().fg(BRAND_MUTED))
            }
        })
        .collect();

    let mut summary = vec![Span::styled(format!(" {} ", property.name), HEADER_STYLE)];
    summary.extend(floor_tabs);
    if let Some(plan) = &plan {
        summary.push(Span::raw(format!(
            " | {} occupied, {} available, {} reserved | ",
            plan.occupancy.occupied, plan.occupancy.available, plan.occupancy.reserved
        )));
        summary.push(utilization_span(plan.occupancy.utilization()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(summary)).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    match plan {
        Some(plan) => draw_offices(frame, chunks[1], &plan),
        None => frame.render_widget(
            Paragraph::new(Span::styled(
                " This property has no offices yet ",
                Style::default().fg(BRAND_MUTED),
            ))
            .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        ),
    }
}

fn draw_offices(frame: &mut Frame, area: Rect, plan: &FloorPlan<'_>) {
    let bodies: Vec<Vec<Line>> = plan.offices.iter().map(office_lines).collect();
    let constraints: Vec<Constraint> = bodies
        .iter()
        .map(|lines| Constraint::Length(u16::try_from(lines.len() + 2).unwrap_or(u16::MAX)))
        .collect();
    let chunks = Layout::vertical(constraints).split(area);

    for ((office, lines), chunk) in plan.offices.iter().zip(bodies).zip(chunks.iter()) {
        let title = format!(
            " {} ({}) {}/{} ",
            office.office.name,
            office.office.office_type,
            office.occupancy.occupied,
            office.occupancy.total()
        );
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_ACCENT)),
        );
        frame.render_widget(paragraph, *chunk);
    }
}

fn office_lines<'a>(plan: &OfficePlan<'a>) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = plan
        .grid
        .iter()
        .map(|row| Line::from(row.iter().map(|cell| grid_cell(*cell)).collect::<Vec<_>>()))
        .collect();

    if !plan.loose.is_empty() {
        let mut spans = vec![Span::styled(
            if plan.grid.is_empty() { "Desks: " } else { "Unplaced: " },
            Style::default().fg(BRAND_MUTED),
        )];
        spans.extend(plan.loose.iter().map(|ws| desk_span(ws)));
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No workstations",
            Style::default().fg(BRAND_MUTED),
        )));
    }
    lines
}

fn grid_cell(cell: Option<&Workstation>) -> Span<'static> {
    match cell {
        Some(ws) => {
            let label = ws.code.rsplit('-').next().unwrap_or(&ws.code);
            let style = Style::default().fg(status_color(ws.status));
            let style = if ws.status == WorkstationStatus::Occupied {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };
            Span::styled(format!("[{label:^w$}]", w = CELL_WIDTH - 2), style)
        }
        None => Span::styled(
            format!("{:^CELL_WIDTH$}", "·"),
            Style::default().fg(BRAND_MUTED),
        ),
    }
}

fn desk_span(ws: &Workstation) -> Span<'static> {
    Span::styled(
        format!("{} ", ws.code),
        Style::default().fg(status_color(ws.status)),
    )
}
