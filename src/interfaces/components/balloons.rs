//! Balloons rising across the window after a top-tier prediction.

use eframe::egui;
use rand::Rng;

const BALLOON_COUNT: usize = 30;
const SHOW_SECONDS: f64 = 5.0;
const MAX_DELAY_SECONDS: f32 = 1.2;

const PALETTE: [egui::Color32; 6] = [
    egui::Color32::from_rgb(255, 75, 75),
    egui::Color32::from_rgb(255, 193, 7),
    egui::Color32::from_rgb(76, 175, 80),
    egui::Color32::from_rgb(30, 136, 229),
    egui::Color32::from_rgb(171, 71, 188),
    egui::Color32::from_rgb(255, 112, 67),
];

#[derive(Debug, Clone)]
struct Balloon {
    /// Horizontal position as a fraction of the area width
    x_frac: f32,
    radius: f32,
    /// Fraction of the area height climbed per second
    rise_rate: f32,
    delay: f32,
    sway_phase: f32,
    color: egui::Color32,
}

pub struct BalloonShow {
    started_at: f64,
    balloons: Vec<Balloon>,
}

impl BalloonShow {
    pub fn launch(now: f64) -> Self {
        Self::launch_with(now, &mut rand::rng())
    }

    pub fn launch_with(now: f64, rng: &mut impl Rng) -> Self {
        let balloons = (0..BALLOON_COUNT)
            .map(|_| Balloon {
                x_frac: rng.random_range(0.05..0.95),
                radius: rng.random_range(14.0..26.0),
                rise_rate: rng.random_range(0.35..0.6),
                delay: rng.random_range(0.0..MAX_DELAY_SECONDS),
                sway_phase: rng.random_range(0.0..std::f32::consts::TAU),
                color: PALETTE[rng.random_range(0..PALETTE.len())],
            })
            .collect();

        Self {
            started_at: now,
            balloons,
        }
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= SHOW_SECONDS
    }

    pub fn len(&self) -> usize {
        self.balloons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balloons.is_empty()
    }

    fn center(balloon: &Balloon, area: egui::Rect, now: f64, started_at: f64) -> egui::Pos2 {
        let elapsed = ((now - started_at) as f32 - balloon.delay).max(0.0);
        let sway = (elapsed * 2.0 + balloon.sway_phase).sin() * 8.0;
        let x = area.left() + balloon.x_frac * area.width() + sway;
        let y = area.bottom() + balloon.radius - elapsed * balloon.rise_rate * area.height();
        egui::pos2(x, y)
    }

    pub fn paint(&self, painter: &egui::Painter, area: egui::Rect, now: f64) {
        for balloon in &self.balloons {
            let center = Self::center(balloon, area, now, self.started_at);
            if center.y + balloon.radius * 3.0 < area.top() {
                continue;
            }

            let knot = center + egui::vec2(0.0, balloon.radius);
            painter.line_segment(
                [knot, knot + egui::vec2(0.0, balloon.radius * 1.6)],
                egui::Stroke::new(1.0, egui::Color32::from_gray(180)),
            );
            painter.circle_filled(center, balloon.radius, balloon.color);
            // Highlight
            painter.circle_filled(
                center + egui::vec2(-balloon.radius * 0.35, -balloon.radius * 0.35),
                balloon.radius * 0.2,
                egui::Color32::from_white_alpha(90),
            );
        }
    }
}
