use crate::model::WorkstationStatus;
use crate::store::Utilization;
use crate::ui::app::{App, AssignStage, Modal, View};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Tabs, Wrap,
    },
    Frame,
};

// Brandbook colors
pub(super) const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c - primary dark
pub(super) const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71 - blue accent
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0 - selection background
pub(super) const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68 - green
pub(super) const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c - orange
pub(super) const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565 - muted (footer)

// Styles
pub(super) const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

pub(super) fn status_color(status: WorkstationStatus) -> Color {
    match status {
        WorkstationStatus::Available => BRAND_GREEN,
        WorkstationStatus::Occupied => BRAND_ORANGE,
        WorkstationStatus::Reserved => BRAND_ACCENT,
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Tabs
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_tabs(frame, chunks[1], app);

    match app.view {
        View::Overview => draw_overview(frame, chunks[2], app),
        View::Properties => draw_properties(frame, chunks[2], app),
        View::Offices => draw_offices(frame, chunks[2], app),
        View::Workstations => draw_workstations(frame, chunks[2], app),
        View::Employees => draw_employees(frame, chunks[2], app),
        View::Assignments => draw_assignments(frame, chunks[2], app),
        View::Reports => draw_reports(frame, chunks[2], app),
        View::FloorPlan => super::floor::draw_floor_plan(frame, chunks[2], app),
    }

    draw_footer(frame, chunks[3], app);

    if let Some(modal) = &app.modal {
        draw_modal(frame, app, modal);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let title = format!(
        " Workstation Manager | {} properties | {} offices | {} workstations | utilization {} ",
        store.properties().len(),
        store.offices().len(),
        store.workstations().len(),
        store.utilization()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{} {}", i + 1, v.title()));

    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .highlight_style(SELECTED_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.view {
        View::Workstations if app.searching => " Type to search | Enter/Esc Done ",
        View::Workstations => {
            " ↑↓ Select | a Assign | r Reserve | f Status | / Search | c Clear | d Delete | q Quit "
        }
        View::Assignments => " ↑↓ Select | a Assign | d Unassign | Tab View | q Quit ",
        View::Properties | View::Offices | View::Employees => {
            " ↑↓ Select | a Assign | d Delete | R Reset | Tab View | q Quit "
        }
        View::FloorPlan => " ↑↓ Property | ←→ Floor | Tab View | q Quit ",
        View::Overview | View::Reports => " ↑↓ Select | a Assign | R Reset | Tab View | q Quit ",
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(help, Style::default().fg(BRAND_MUTED)),
        Span::styled(
            format!("| {}", app.status),
            Style::default().fg(BRAND_ACCENT),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Renders a table with the selected row highlighted and kept in view.
fn draw_selectable_table(
    frame: &mut Frame,
    area: Rect,
    title: String,
    header: &[&'static str],
    rows: Vec<Row<'_>>,
    widths: &[Constraint],
    selected: usize,
) {
    // Calculate visible area (subtract 3 for borders and header)
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = rows.len();

    let scroll_offset = if selected >= visible_rows {
        selected - visible_rows + 1
    } else {
        0
    };

    let rows: Vec<Row> = rows
        .into_iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, row)| {
            if i == selected {
                row.style(SELECTED_STYLE)
            } else {
                row
            }
        })
        .collect();

    let header = Row::new(header.iter().copied())
        .style(HEADER_STYLE)
        .height(1);

    let table = Table::new(rows, widths.iter().copied())
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);

    if total > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(total).position(selected);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn status_cell(status: WorkstationStatus) -> Cell<'static> {
    Cell::from(status.to_string()).style(Style::default().fg(status_color(status)))
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let cards = [
        (
            "Assigned",
            store.active_assignments().count().to_string(),
            BRAND_DARK,
        ),
        (
            "Available",
            store.available_workstations().len().to_string(),
            BRAND_GREEN,
        ),
        (
            "Awaiting a desk",
            store.unassigned_employees().len().to_string(),
            BRAND_ORANGE,
        ),
        ("Utilization", store.utilization().to_string(), BRAND_DARK),
    ];

    let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (chunk, (label, value, color)) in chunks.iter().zip(cards) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {label} "),
                    Style::default().fg(BRAND_MUTED),
                ))
                .borders(Borders::ALL),
        );
        frame.render_widget(card, *chunk);
    }
}

fn draw_overview(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).split(area);
    draw_stat_cards(frame, chunks[0], app);

    let panels = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);

    let store = &app.store;
    let items: Vec<ListItem> = store
        .properties()
        .iter()
        .enumerate()
        .map(|(i, property)| {
            let style = if i == app.selected_row() {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            let utilization = store.property_occupancy(&property.id).utilization();
            ListItem::new(Line::from(vec![
                Span::styled(&property.name, style),
                Span::raw(" "),
                Span::styled(
                    format!("({utilization})"),
                    Style::default().fg(BRAND_GREEN),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Properties ({}) ", store.properties().len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );
    frame.render_widget(list, panels[0]);

    let Some(property) = app.selected_property() else {
        return;
    };

    let offices: Vec<_> = store
        .offices()
        .iter()
        .filter(|o| o.property_id == property.id)
        .collect();
    let rows: Vec<Row> = offices
        .iter()
        .map(|office| {
            let occupancy = store.office_occupancy(&office.id);
            Row::new(vec![
                Cell::from(office.name.clone()),
                Cell::from(office.floor.to_string()),
                Cell::from(office.office_type.to_string()),
                Cell::from(format!("{}/{}", occupancy.occupied, occupancy.total())),
                Cell::from(occupancy.reserved.to_string()),
                Cell::from(occupancy.utilization().to_string()),
            ])
        })
        .collect();

    let header = Row::new(["Office", "Floor", "Type", "Occupied", "Reserved", "Rate"])
        .style(HEADER_STYLE);
    let widths = [
        Constraint::Percentage(36),
        Constraint::Percentage(10),
        Constraint::Percentage(12),
        Constraint::Percentage(16),
        Constraint::Percentage(12),
        Constraint::Percentage(14),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" {} ({} offices) ", property.name, offices.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, panels[1]);
}

fn draw_properties(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let rows: Vec<Row> = store
        .properties()
        .iter()
        .map(|p| {
            Row::new(vec![
                p.code.clone(),
                p.name.clone(),
                p.property_type.clone(),
                p.region.clone(),
                format!("{:.0} m²", p.area),
                p.floors.to_string(),
                p.certificate_no.clone().unwrap_or_else(|| "-".to_string()),
                p.company.clone().unwrap_or_else(|| "-".to_string()),
            ])
        })
        .collect();

    draw_selectable_table(
        frame,
        area,
        format!(" Properties ({}) ", store.properties().len()),
        &[
            "Code", "Name", "Type", "Region", "Area", "Floors", "Certificate", "Company",
        ],
        rows,
        &[
            Constraint::Percentage(8),
            Constraint::Percentage(20),
            Constraint::Percentage(12),
            Constraint::Percentage(16),
            Constraint::Percentage(10),
            Constraint::Percentage(6),
            Constraint::Percentage(13),
            Constraint::Percentage(15),
        ],
        app.selected_row(),
    );
}

fn draw_offices(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let rows: Vec<Row> = store
        .offices()
        .iter()
        .map(|o| {
            let occupancy = store.office_occupancy(&o.id);
            let layout = o
                .layout
                .map_or_else(|| "-".to_string(), |l| format!("{}x{}", l.rows, l.columns));
            Row::new(vec![
                o.name.clone(),
                store
                    .property_name(&o.property_id)
                    .unwrap_or(&o.property_name)
                    .to_string(),
                o.floor.to_string(),
                o.office_type.to_string(),
                o.total_workstations.to_string(),
                format!("{}/{}", o.occupied_workstations, occupancy.total()),
                occupancy.utilization().to_string(),
                layout,
            ])
        })
        .collect();

    draw_selectable_table(
        frame,
        area,
        format!(" Offices ({}) ", store.offices().len()),
        &[
            "Name", "Property", "Floor", "Type", "Capacity", "Occupied", "Rate", "Layout",
        ],
        rows,
        &[
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(7),
            Constraint::Percentage(9),
            Constraint::Percentage(10),
            Constraint::Percentage(11),
            Constraint::Percentage(10),
            Constraint::Percentage(9),
        ],
        app.selected_row(),
    );
}

fn draw_workstations(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let filtered = app.filtered_workstations();

    let rows: Vec<Row> = filtered
        .iter()
        .map(|ws| {
            let position = ws
                .position
                .map_or_else(|| "-".to_string(), |p| format!("R{} C{}", p.row, p.column));
            let occupant = ws
                .assigned_to
                .as_deref()
                .and_then(|id| store.employee(id))
                .map_or_else(|| "-".to_string(), |e| e.name.clone());
            Row::new(vec![
                Cell::from(ws.code.clone()),
                Cell::from(
                    store
                        .office_name(&ws.office_id)
                        .unwrap_or(&ws.office_name)
                        .to_string(),
                ),
                Cell::from(ws.floor.to_string()),
                Cell::from(position),
                status_cell(ws.status),
                Cell::from(occupant),
            ])
        })
        .collect();

    let filter = &app.workstation_filter;
    let status = filter
        .status
        .map_or_else(|| "all".to_string(), |s| s.to_string());
    let cursor = if app.searching { "_" } else { "" };
    let title = format!(
        " Workstations ({}/{}) | status: {} | search: {}{} ",
        filtered.len(),
        store.workstations().len(),
        status,
        filter.code_query,
        cursor
    );

    draw_selectable_table(
        frame,
        area,
        title,
        &["Code", "Office", "Floor", "Position", "Status", "Employee"],
        rows,
        &[
            Constraint::Percentage(15),
            Constraint::Percentage(28),
            Constraint::Percentage(8),
            Constraint::Percentage(12),
            Constraint::Percentage(14),
            Constraint::Percentage(23),
        ],
        app.selected_row(),
    );
}

fn draw_employees(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let internal = store
        .employees()
        .iter()
        .filter(|e| e.employee_type == crate::model::EmployeeType::Internal)
        .count();

    let rows: Vec<Row> = store
        .employees()
        .iter()
        .map(|e| {
            let desk = e
                .workstation_id
                .as_deref()
                .map_or_else(|| "-".to_string(), |id| {
                    store
                        .workstation(id)
                        .map_or_else(|| format!("{id}?"), |ws| ws.code.clone())
                });
            Row::new(vec![
                e.name.clone(),
                e.employee_no.clone(),
                e.department.clone(),
                e.company.clone(),
                e.employee_type.to_string(),
                desk,
            ])
        })
        .collect();

    draw_selectable_table(
        frame,
        area,
        format!(
            " Employees ({}) | internal {} | external {} ",
            store.employees().len(),
            internal,
            store.employees().len() - internal
        ),
        &["Name", "No", "Department", "Company", "Type", "Workstation"],
        rows,
        &[
            Constraint::Percentage(18),
            Constraint::Percentage(10),
            Constraint::Percentage(18),
            Constraint::Percentage(24),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
        ],
        app.selected_row(),
    );
}

fn draw_assignments(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).split(area);
    draw_stat_cards(frame, chunks[0], app);

    let rows: Vec<Row> = app
        .store
        .assignment_rows()
        .iter()
        .map(|row| {
            let (details, employee_type) = row.employee.map_or_else(
                || ("-".to_string(), "-".to_string()),
                |e| {
                    (
                        format!("{} / {}", e.department, e.employee_no),
                        e.employee_type.to_string(),
                    )
                },
            );
            let style = if row.assignment.is_active() {
                Style::default()
            } else {
                Style::default().fg(BRAND_MUTED)
            };
            Row::new(vec![
                row.assignment.employee_name.clone(),
                details,
                row.workstation_code().to_string(),
                row.office_name().to_string(),
                employee_type,
                row.assignment.assigned_by.clone(),
                row.assignment.assigned_at.clone(),
            ])
            .style(style)
        })
        .collect();

    draw_selectable_table(
        frame,
        chunks[1],
        format!(" Assignment records ({}) ", app.store.assignments().len()),
        &[
            "Employee",
            "Details",
            "Workstation",
            "Office",
            "Type",
            "Assigned by",
            "Assigned at",
        ],
        rows,
        &[
            Constraint::Percentage(14),
            Constraint::Percentage(18),
            Constraint::Percentage(11),
            Constraint::Percentage(18),
            Constraint::Percentage(9),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
        ],
        app.selected_row(),
    );
}

fn draw_reports(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).split(area);
    let summary = app.store.report_summary();

    let average = summary
        .average_area
        .map_or_else(|| "-".to_string(), |a| format!("{a:.0} m²"));
    let summary_line = format!(
        " Total area {:.0} m² | average {} | {} companies | {} branches ",
        summary.total_area,
        average,
        summary.companies,
        summary.branches.len()
    );
    frame.render_widget(
        Paragraph::new(summary_line)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let panels = Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(chunks[1]);

    let report = app.store.property_report();
    let rows: Vec<Row> = report
        .iter()
        .map(|r| {
            Row::new(vec![
                r.sequence.to_string(),
                r.company_name.clone(),
                r.branch_name.clone().unwrap_or_else(|| "-".to_string()),
                r.certificate_no.clone(),
                r.property_name.clone(),
                format!("{:.0}", r.building_area),
                r.address.clone(),
                r.area_share
                    .map_or_else(|| "-".to_string(), |s| format!("{s:.1}%")),
            ])
        })
        .collect();

    draw_selectable_table(
        frame,
        panels[0],
        format!(" Office premises report ({}) ", report.len()),
        &[
            "No", "Company", "Branch", "Certificate", "Property", "Area m²", "Address", "Share",
        ],
        rows,
        &[
            Constraint::Percentage(5),
            Constraint::Percentage(15),
            Constraint::Percentage(13),
            Constraint::Percentage(12),
            Constraint::Percentage(16),
            Constraint::Percentage(8),
            Constraint::Percentage(24),
            Constraint::Percentage(7),
        ],
        app.selected_row(),
    );

    let items: Vec<ListItem> = summary
        .branches
        .iter()
        .map(|branch| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    branch.branch_name.clone().unwrap_or_else(|| "-".to_string()),
                    HEADER_STYLE,
                )),
                Line::from(Span::styled(
                    format!("  {:.0} m² | {} items", branch.area, branch.properties),
                    Style::default().fg(BRAND_MUTED),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" By branch ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );
    frame.render_widget(list, panels[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn draw_modal(frame: &mut Frame, app: &App, modal: &Modal) {
    match modal {
        Modal::Message(message) => {
            let area = centered(frame.area(), 60, 5);
            frame.render_widget(Clear, area);
            let body = Paragraph::new(message.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(" Notice (any key) ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(BRAND_ORANGE)),
                );
            frame.render_widget(body, area);
        }
        Modal::Confirm { prompt, .. } => {
            let area = centered(frame.area(), 60, 5);
            frame.render_widget(Clear, area);
            let body = Paragraph::new(vec![
                Line::from(prompt.as_str()),
                Line::from(Span::styled(
                    "y Confirm | n Cancel",
                    Style::default().fg(BRAND_MUTED),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Confirm ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BRAND_ORANGE)),
            );
            frame.render_widget(body, area);
        }
        Modal::Assign(picker) => {
            let area = centered(frame.area(), 70, 20);
            frame.render_widget(Clear, area);

            let (title, labels, selected) = match picker.stage {
                AssignStage::Workstation => (
                    " Assign: pick an available workstation (Enter) ",
                    app.store
                        .available_workstations()
                        .iter()
                        .map(|ws| format!("{} - {} (floor {})", ws.code, ws.office_name, ws.floor))
                        .collect::<Vec<_>>(),
                    picker.workstation,
                ),
                AssignStage::Employee => (
                    " Assign: pick an employee (Enter, Esc back) ",
                    app.store
                        .unassigned_employees()
                        .iter()
                        .map(|e| format!("{} - {} ({})", e.name, e.department, e.employee_no))
                        .collect::<Vec<_>>(),
                    picker.employee,
                ),
            };

            let visible = (area.height as usize).saturating_sub(2);
            let offset = (selected + 1).saturating_sub(visible);
            let items: Vec<ListItem> = if labels.is_empty() {
                vec![ListItem::new(Span::styled(
                    "Nothing to choose from",
                    Style::default().fg(BRAND_MUTED),
                ))]
            } else {
                labels
                    .into_iter()
                    .enumerate()
                    .skip(offset)
                    .take(visible)
                    .map(|(i, label)| {
                        let style = if i == selected {
                            SELECTED_STYLE
                        } else {
                            Style::default()
                        };
                        ListItem::new(Span::styled(label, style))
                    })
                    .collect()
            };

            let list = List::new(items).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BRAND_ORANGE)),
            );
            frame.render_widget(list, area);
        }
    }
}

/// Shared with the floor plan legend.
#[must_use]
pub(super) fn utilization_span(utilization: Utilization) -> Span<'static> {
    let color = match utilization.rate() {
        Some(rate) if rate >= 0.9 => BRAND_ORANGE,
        Some(_) => BRAND_GREEN,
        None => BRAND_MUTED,
    };
    Span::styled(utilization.to_string(), Style::default().fg(color))
}
