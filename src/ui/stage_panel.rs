//! Right-hand panel describing the stage on screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::stage::{security, CurrentStage, EdgeKind, Outlook, Stage, OBJECTIVES};
use crate::theme;

pub fn stage_panel_ui(mut contexts: EguiContexts, current: Res<CurrentStage>) -> Result {
    let stage = current.stage();
    let info = stage.info();

    egui::SidePanel::right("stage_panel")
        .default_width(340.0)
        .resizable(true)
        .show(contexts.ctx_mut()?, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading("Strategic Objectives");
                for (icon, title, caption) in OBJECTIVES {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).size(18.0));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(title).strong());
                            ui.label(egui::RichText::new(caption).weak().size(11.0));
                        });
                    });
                }

                ui.add_space(10.0);
                ui.separator();

                // Stage info card
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(2.0, info.accent))
                    .corner_radius(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(info.title).strong().size(16.0).color(info.accent));
                        ui.add_space(4.0);
                        ui.label(info.description);

                        ui.add_space(8.0);
                        ui.label(egui::RichText::new("Business Impact").strong());
                        for line in info.business_impact {
                            ui.label(*line);
                        }

                        ui.add_space(8.0);
                        let mark_color = match info.outlook {
                            Outlook::Risks => theme::ui::RISK_MARK,
                            Outlook::Benefits => theme::ui::BENEFIT_MARK,
                        };
                        ui.label(egui::RichText::new(info.outlook.heading()).strong());
                        for point in info.points {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(egui::RichText::new(info.outlook.mark()).color(mark_color));
                                ui.label(*point);
                            });
                        }
                    });

                ui.add_space(10.0);
                ui.separator();
                legend(ui);

                ui.add_space(10.0);
                ui.separator();
                timeline(ui, stage);

                if stage == Stage::Proxy {
                    ui.add_space(10.0);
                    ui.separator();
                    security_details(ui);
                }
            });
        });
    Ok(())
}

fn legend(ui: &mut egui::Ui) {
    ui.heading("Legend");
    for kind in EdgeKind::all() {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 12.0), egui::Sense::hover());
            let color = theme::bevy_to_egui(kind.color());
            let y = rect.center().y;
            if kind.is_dashed() {
                ui.painter().extend(egui::Shape::dashed_line(
                    &[egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                    egui::Stroke::new(2.0, color),
                    5.0,
                    3.0,
                ));
            } else {
                ui.painter().line_segment(
                    [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                    egui::Stroke::new(2.0, color),
                );
            }
            ui.label(kind.legend_label());
        });
    }
}

fn timeline(ui: &mut egui::Ui, current: Stage) {
    ui.heading("Migration Timeline");
    ui.horizontal(|ui| {
        for (index, stage) in Stage::all().iter().enumerate() {
            let info = stage.info();
            let active = *stage == current;
            let color = if active {
                info.accent
            } else {
                theme::ui::TIMELINE_INACTIVE
            };

            if index > 0 {
                ui.label(egui::RichText::new("→").color(theme::ui::TIMELINE_INACTIVE));
            }
            ui.vertical(|ui| {
                let (label, caption) = info.timeline;
                let mut text = egui::RichText::new(label).color(color);
                if active {
                    text = text.strong();
                }
                ui.label(text);
                ui.label(egui::RichText::new(caption).size(11.0).color(theme::ui::TIMELINE_INACTIVE));
            });
        }
    });
}

fn security_details(ui: &mut egui::Ui) {
    ui.heading("Security Architecture Details");

    ui.label(egui::RichText::new("Dual Connection Architecture").strong());
    for (name, detail) in security::CONNECTIONS {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(name).strong());
            ui.label(detail);
        });
    }

    ui.add_space(6.0);
    ui.label(egui::RichText::new(security::WAF_HEADING).strong());
    egui::Grid::new("waf_rules_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (name, value) in security::WAF_RULES {
                ui.label(name);
                ui.label(egui::RichText::new(value).strong());
                ui.end_row();
            }
        });

    ui.add_space(6.0);
    ui.label(
        egui::RichText::new("Safe Deployment Strategy")
            .strong()
            .color(theme::ui::WARNING_TEXT),
    );
    for (phase, detail) in security::DEPLOYMENT_PHASES {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(phase).strong());
            ui.label(detail);
        });
    }
}
