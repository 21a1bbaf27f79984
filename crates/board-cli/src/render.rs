//! Table output for list pages and record details.

use board_model::{Company, Job, TeamMember};
use board_query::View;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// Column layout of a record type in list output.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl TableRow for Company {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Industry", "Website", "Headquarters"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.industry.label().to_string(),
            self.website.clone(),
            self.headquarters.clone(),
        ]
    }
}

impl TableRow for Job {
    const HEADERS: &'static [&'static str] =
        &["ID", "Title", "Company", "Level", "Type", "Mode", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.company_name()
                .map_or_else(|| format!("#{}", self.company_id), str::to_string),
            self.experience_level.label().to_string(),
            self.job_type.label().to_string(),
            self.work_mode.label().to_string(),
            self.status_label().to_string(),
        ]
    }
}

impl TableRow for TeamMember {
    const HEADERS: &'static [&'static str] =
        &["Name", "Position", "Location", "Category", "Practice Areas"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.position.clone(),
            self.location.clone(),
            self.category.clone(),
            self.practice_areas.join(", "),
        ]
    }
}

/// Plain content of a rendered page, before styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: String,
}

impl PageModel {
    pub fn from_view<R: TableRow>(view: &View<'_, R>) -> Self {
        Self {
            headers: R::HEADERS.iter().map(|h| (*h).to_string()).collect(),
            rows: view.records.iter().map(|record| record.cells()).collect(),
            footer: page_footer(view),
        }
    }
}

/// `Page X of Y` plus how many records survived the query.
pub fn page_footer<R>(view: &View<'_, R>) -> String {
    if view.total_matches == 0 {
        return format!("No matching records ({} loaded).", view.total_records);
    }
    format!(
        "Page {} of {} ({} of {} records)",
        view.current_page, view.total_pages, view.total_matches, view.total_records
    )
}

pub fn page_table(model: &PageModel) -> Table {
    let mut table = Table::new();
    table.set_header(model.headers.iter().map(|h| header_cell(h)));
    apply_table_style(&mut table);
    for row in &model.rows {
        table.add_row(row.iter().map(|value| value_cell(value)));
    }
    table
}

pub fn print_page<R: TableRow>(view: &View<'_, R>) {
    let model = PageModel::from_view(view);
    if !model.rows.is_empty() {
        println!("{}", page_table(&model));
    }
    println!("{}", model.footer);
}

/// Two-column `field | value` table for a single record.
pub fn detail_table(fields: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (label, value) in fields {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            value_cell(value),
        ]);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn company_details(company: &Company) -> Vec<(&'static str, String)> {
    vec![
        ("ID", company.id.to_string()),
        ("Name", company.name.clone()),
        ("Industry", company.industry.label().to_string()),
        ("Website", company.website.clone()),
        ("Headquarters", company.headquarters.clone()),
        (
            "Created",
            company
                .created_at
                .map_or_else(String::new, |at| at.format("%Y-%m-%d").to_string()),
        ),
    ]
}

/// Profile fields of one team member.
pub fn team_member_details(member: &TeamMember) -> Vec<(&'static str, String)> {
    vec![
        ("ID", member.id.to_string()),
        ("Name", format!("{} {}", member.first_name, member.last_name).trim().to_string()),
        ("Position", member.position.clone()),
        ("Location", member.location.clone()),
        ("Category", member.category.clone()),
        ("Practice areas", member.practice_areas.join(", ")),
        ("Profile", member.slug.clone()),
        ("Bio", member.bio.clone()),
    ]
}

/// Facet lists, one line per dimension.
pub fn print_facets(facets: &[(&'static str, Vec<String>)]) {
    println!();
    println!("Filter values:");
    for (dimension, values) in facets {
        if values.is_empty() {
            println!("  {dimension}: -");
        } else {
            println!("  {dimension}: {}", values.join(", "));
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}
