//! Page sections. Each section reads the derived [`PageView`] and pushes
//! the user's interactions as [`PageEvent`]s instead of mutating state.

use bevy_egui::egui;
use budget::page::{AgencyRow, PageEvent, PageView, SelectionSummary, StatusMessage};
use budget::persistence::Identity;

use crate::charts;
use crate::theme::{ALERT_RED, SUCCESS_GREEN};

pub const PAGE_TITLE: &str = "US Government Agency Costs Per Citizen";
const SELECT_HEADER: &str = "Select Programs to Fund (not all programs are listed)";
const SUBMIT_LABEL: &str = "Submit Selection";
const BANNER_CAPTION: &str = "TOTAL SELECTED PROGRAM COST PER CITIZEN";

const INTRO: [&str; 3] = [
    "It's easy to call for increased government funding or criticize program cuts, \
     but have you ever considered how much these programs actually cost you?",
    "Below is a breakdown of various government programs and their cost per citizen \
     per year. Given that these expenses are covered by taxpayers, what programs would \
     you choose to fund, and how much would you personally be willing to contribute?",
    "At the end, we'll collect the data to see which programs citizens value the most.",
];

const DONUT_SIZE: f32 = 420.0;

pub(crate) fn render_page(
    ui: &mut egui::Ui,
    view: &PageView,
    identity: &Identity,
    out: &mut Vec<PageEvent>,
) {
    ui.label(egui::RichText::new(PAGE_TITLE).size(30.0).strong());
    ui.add_space(6.0);
    for paragraph in INTRO {
        ui.label(paragraph);
        ui.add_space(4.0);
    }
    ui.add_space(8.0);

    identity_fields(ui, identity, out);
    ui.add_space(12.0);

    ui.heading(SELECT_HEADER);
    ui.separator();

    let total_width = ui.available_width();
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width((total_width * 0.4 - 8.0).max(200.0));
            agency_checklist(ui, &view.rows, out);
        });
        ui.vertical(|ui| {
            ui.set_width((total_width * 0.6 - 8.0).max(200.0));
            overview_section(ui, view);
        });
    });

    ui.add_space(12.0);
    if ui.button(SUBMIT_LABEL).clicked() {
        out.push(PageEvent::SubmitPressed);
    }
    if let Some(status) = &view.status {
        status_line(ui, status);
    }

    if let (Some(summary), Some(flow)) = (&view.summary, &view.flow) {
        ui.add_space(16.0);
        summary_banner(ui, summary);
        ui.add_space(8.0);
        let width = ui.available_width().min(900.0);
        charts::draw_sankey(ui, flow, width);
    }
}

fn identity_fields(ui: &mut egui::Ui, identity: &Identity, out: &mut Vec<PageEvent>) {
    egui::Grid::new("identity_fields")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name");
            let mut name = identity.name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                out.push(PageEvent::NameChanged(name));
            }
            ui.end_row();

            ui.label("Email");
            let mut email = identity.email.clone();
            if ui.text_edit_singleline(&mut email).changed() {
                out.push(PageEvent::EmailChanged(email));
            }
            ui.end_row();
        });
}

fn agency_checklist(ui: &mut egui::Ui, rows: &[AgencyRow], out: &mut Vec<PageEvent>) {
    egui::ScrollArea::vertical()
        .id_salt("agency_checklist")
        .max_height(DONUT_SIZE + 120.0)
        .show(ui, |ui| {
            for row in rows {
                let mut checked = row.checked;
                if ui.checkbox(&mut checked, row.label.as_str()).changed() {
                    out.push(PageEvent::AgencyToggled {
                        name: row.name.clone(),
                        checked,
                    });
                }
            }
        });
}

fn overview_section(ui: &mut egui::Ui, view: &PageView) {
    let size = ui.available_width().min(DONUT_SIZE);
    charts::draw_donut(ui, &view.overview, size);
    ui.add_space(4.0);
    charts::draw_legend(ui, &view.overview, 140.0);
}

fn status_line(ui: &mut egui::Ui, status: &StatusMessage) {
    let color = if status.is_error() {
        ALERT_RED
    } else {
        SUCCESS_GREEN
    };
    ui.colored_label(color, status.text());
}

fn summary_banner(ui: &mut egui::Ui, summary: &SelectionSummary) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(BANNER_CAPTION).size(26.0).strong());
        ui.label(
            egui::RichText::new(summary.headline())
                .size(40.0)
                .strong()
                .color(ALERT_RED),
        );
        ui.label(format!(
            "{} programs, ${:.1}M per year in total",
            summary.agency_count, summary.total_budget
        ));
    });
}
