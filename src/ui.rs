// ui.rs - egui front end: controls, cell grid, gridlines and tile overlays

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};
use tiled_life::patterns;
use tiled_life::EngineKind;

use crate::LifeApp;

const GRIDLINE_COLOR: Color32 = Color32::from_rgb(211, 211, 211);
const TILE_COLOR: Color32 = Color32::from_rgb(255, 0, 0);

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Tiled Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.life.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.life.apply_pattern(&patterns::PATTERNS[self.selected_pattern]);
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Engine:");
                let mut kind = self.life.engine_kind();
                for candidate in EngineKind::ALL {
                    ui.radio_value(&mut kind, candidate, candidate.to_string());
                }
                self.life.set_engine(kind);

                ui.separator();

                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Chance:");
                ui.add(egui::Slider::new(&mut self.chance_of_life, 0..=100).suffix("%"));
            });

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_gridlines, "Gridlines");
                ui.checkbox(&mut self.show_tiles, "Tile boundaries");

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            if let Some(err) = &self.last_error {
                ui.colored_label(Color32::RED, err.as_str());
            }

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            let view = self.life.current_grid();
            let total = view.width() * view.height();
            let live_cells = view.population();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.life.generation()));
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
                if self.life.is_cycling() {
                    ui.label("Cycle detected");
                }
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let view = self.life.current_grid();
        let (width, height, tile_size) = (view.width(), view.height(), view.tile_size());

        let cell_size = (ui.available_width() / width as f32).clamp(2.0, 15.0);
        let total_size = Vec2::new(cell_size * width as f32, cell_size * height as f32);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;
        let at = |row: usize, col: usize| origin + Vec2::new(col as f32, row as f32) * cell_size;

        // Fill background
        painter.rect_filled(response.rect, 0.0, self.dead_color);

        for (row, col) in view.live_cells() {
            let rect = Rect::from_min_size(at(row, col), Vec2::splat(cell_size));
            painter.rect_filled(rect, 0.0, self.live_color);
        }

        if self.show_gridlines && cell_size >= 4.0 {
            let stroke = Stroke::new(0.5, GRIDLINE_COLOR);
            for col in 0..=width {
                painter.line_segment([at(0, col), at(height, col)], stroke);
            }
            for row in 0..=height {
                painter.line_segment([at(row, 0), at(row, width)], stroke);
            }
        }

        // Seams between work groups
        if self.show_tiles {
            let stroke = Stroke::new(2.0, TILE_COLOR);
            for col in (tile_size..width).step_by(tile_size) {
                painter.line_segment([at(0, col), at(height, col)], stroke);
            }
            for row in (tile_size..height).step_by(tile_size) {
                painter.line_segment([at(row, 0), at(row, width)], stroke);
            }
        }

        // Click cells to toggle them (only when not running)
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, col)) = cell_at(pos, origin, cell_size, width, height) {
                    self.life.toggle(row, col);
                }
            }
        }
    }
}

/// Grid cell under `pos`, if any.
fn cell_at(
    pos: Pos2,
    origin: Pos2,
    cell_size: f32,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    let offset = (pos - origin) / cell_size;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (row, col) = (offset.y as usize, offset.x as usize);
    (row < height && col < width).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn maps_pointer_to_cell() {
        let origin = Pos2::new(10.0, 20.0);
        assert_eq!(cell_at(Pos2::new(10.0, 20.0), origin, 5.0, 4, 4), Some((0, 0)));
        assert_eq!(cell_at(Pos2::new(26.0, 31.0), origin, 5.0, 4, 4), Some((2, 3)));
        assert_eq!(cell_at(Pos2::new(31.0, 21.0), origin, 5.0, 4, 4), None);
        assert_eq!(cell_at(Pos2::new(9.0, 21.0), origin, 5.0, 4, 4), None);
    }
}
