//! # Staff View
//!
//! Staff list with the confirmation-gated delete action, plus the add-staff
//! form (name, email, password, role).

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{BackendAction, StaffRole};

use crate::ui::app_state::SmartStayApp;
use crate::ui::components::form_fields::render_form_field;
use crate::ui::components::theme;

impl SmartStayApp {
    pub fn render_staff_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Staff");
        ui.add_space(8.0);

        let mut requested: Option<BackendAction> = None;

        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(80.0), 3)
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for title in ["Name", "Email", "Role", "Actions"] {
                    header.col(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for member in &self.staff {
                    body.row(26.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&member.name);
                        });
                        row.col(|ui| {
                            ui.label(&member.email);
                        });
                        row.col(|ui| {
                            ui.label(member.role.to_string());
                        });
                        row.col(|ui| {
                            if ui.small_button("Delete").clicked() {
                                requested = Some(BackendAction::DeleteStaff(member.id.clone()));
                            }
                        });
                    });
                }
            });

        if let Some(action) = requested {
            self.request_action(action);
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Add staff member").size(18.0).strong());
        ui.add_space(4.0);

        for field in &mut self.staff_form.fields {
            let _ = render_form_field(ui, field);
        }

        egui::ComboBox::from_label("Role")
            .selected_text(self.staff_role.to_string())
            .show_ui(ui, |ui| {
                for role in StaffRole::ALL {
                    ui.selectable_value(&mut self.staff_role, role, role.to_string());
                }
            });

        ui.add_space(8.0);

        if ui
            .add(egui::Button::new(egui::RichText::new("Add staff").strong()).fill(theme::ACCENT))
            .clicked()
        {
            self.submit_staff();
        }
    }
}
