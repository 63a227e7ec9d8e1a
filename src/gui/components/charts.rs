// src/gui/components/charts.rs
//
// Minimal painter-based charts. Nothing interactive: bars and polylines
// scaled into the allocated rect, with a zero baseline when values go negative.

use chrono::NaiveDate;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::model::SentimentLabel;

const CHART_H: f32 = 220.0;
const PAD: f32 = 28.0;

pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

pub struct Series {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
    pub color: Color32,
}

/// Red for net-negative, blue for net-positive, grey at zero.
pub fn diverging(total: i64) -> Color32 {
    match total.signum() {
        1 => Color32::from_rgb(0x21, 0x66, 0xAC),
        -1 => Color32::from_rgb(0xB2, 0x18, 0x2B),
        _ => Color32::from_gray(0x90),
    }
}

pub fn label_color(label: SentimentLabel) -> Color32 {
    match label {
        SentimentLabel::Positive => Color32::from_rgb(0x00, 0xCC, 0x96),
        SentimentLabel::Negative => Color32::from_rgb(0xEF, 0x55, 0x3B),
        SentimentLabel::Neutral => Color32::from_rgb(0xAB, 0x63, 0xFA),
    }
}

pub fn palette(i: usize) -> Color32 {
    const COLORS: [Color32; 6] = [
        Color32::from_rgb(0x63, 0x6E, 0xFA),
        Color32::from_rgb(0xEF, 0x55, 0x3B),
        Color32::from_rgb(0x00, 0xCC, 0x96),
        Color32::from_rgb(0xAB, 0x63, 0xFA),
        Color32::from_rgb(0xFF, 0xA1, 0x5A),
        Color32::from_rgb(0x19, 0xD3, 0xF3),
    ];
    COLORS[i % COLORS.len()]
}

/// Value range always containing zero; never degenerate.
fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut lo, mut hi) = (0.0f64, 0.0f64);
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi - lo < f64::EPSILON { hi = lo + 1.0; }
    (lo, hi)
}

fn plot_rect(ui: &mut egui::Ui) -> (Rect, egui::Painter) {
    let w = ui.available_width().max(200.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(w, CHART_H), Sense::hover());
    painter.rect_filled(resp.rect, 4.0, ui.visuals().extreme_bg_color);
    (resp.rect.shrink(PAD), painter)
}

fn y_of(v: f64, lo: f64, hi: f64, r: Rect) -> f32 {
    r.bottom() - ((v - lo) / (hi - lo)) as f32 * r.height()
}

fn baseline(painter: &egui::Painter, r: Rect, lo: f64, hi: f64, color: Color32) -> f32 {
    let y0 = y_of(0.0, lo, hi, r);
    painter.line_segment([Pos2::new(r.left(), y0), Pos2::new(r.right(), y0)], Stroke::new(1.0, color));
    y0
}

pub fn bars(ui: &mut egui::Ui, bars: &[Bar]) {
    let text_color = ui.visuals().text_color();
    let (r, painter) = plot_rect(ui);
    if bars.is_empty() {
        painter.text(r.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(14.0), text_color);
        return;
    }

    let (lo, hi) = span(bars.iter().map(|b| b.value));
    let y0 = baseline(&painter, r, lo, hi, text_color.gamma_multiply(0.5));

    let slot = r.width() / bars.len() as f32;
    for (i, b) in bars.iter().enumerate() {
        let cx = r.left() + slot * (i as f32 + 0.5);
        let y = y_of(b.value, lo, hi, r);
        let half = slot * 0.3;
        let bar = Rect::from_two_pos(Pos2::new(cx - half, y0), Pos2::new(cx + half, y));
        painter.rect_filled(bar, 2.0, b.color);

        // value above positive bars, below negative ones
        let (vy, anchor) = if b.value >= 0.0 {
            (bar.top() - 2.0, Align2::CENTER_BOTTOM)
        } else {
            (bar.bottom() + 2.0, Align2::CENTER_TOP)
        };
        painter.text(Pos2::new(cx, vy), anchor, format!("{}", b.value), FontId::proportional(12.0), text_color);
        painter.text(
            Pos2::new(cx, r.bottom() + PAD * 0.5),
            Align2::CENTER_CENTER,
            &b.label,
            FontId::proportional(12.0),
            text_color,
        );
    }
}

pub fn lines(ui: &mut egui::Ui, series: &[Series]) {
    let text_color = ui.visuals().text_color();
    let (r, painter) = plot_rect(ui);

    let mut dates: Vec<NaiveDate> = series.iter().flat_map(|s| s.points.iter().map(|p| p.0)).collect();
    dates.sort_unstable();
    dates.dedup();
    let (Some(first), Some(last)) = (dates.first().copied(), dates.last().copied()) else {
        painter.text(r.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(14.0), text_color);
        return;
    };

    let (lo, hi) = span(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));
    baseline(&painter, r, lo, hi, text_color.gamma_multiply(0.5));

    let days = (last - first).num_days().max(1) as f32;
    let x_of = |d: NaiveDate| r.left() + (d - first).num_days() as f32 / days * r.width();

    for s in series {
        let pts: Vec<Pos2> = s.points.iter().map(|&(d, v)| Pos2::new(x_of(d), y_of(v, lo, hi, r))).collect();
        if pts.len() > 1 {
            painter.add(Shape::line(pts.clone(), Stroke::new(2.0, s.color)));
        }
        for p in pts {
            painter.circle_filled(p, 3.0, s.color);
        }
    }

    painter.text(Pos2::new(r.left(), r.bottom() + PAD * 0.5), Align2::LEFT_CENTER,
        first.to_string(), FontId::proportional(11.0), text_color);
    painter.text(Pos2::new(r.right(), r.bottom() + PAD * 0.5), Align2::RIGHT_CENTER,
        last.to_string(), FontId::proportional(11.0), text_color);

    // legend
    let mut y = r.top() - PAD * 0.5;
    for s in series {
        painter.circle_filled(Pos2::new(r.right() - 150.0, y), 4.0, s.color);
        painter.text(Pos2::new(r.right() - 140.0, y), Align2::LEFT_CENTER, &s.name,
            FontId::proportional(11.0), text_color);
        y += 14.0;
    }
}
