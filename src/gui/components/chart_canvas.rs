// src/gui/components/chart_canvas.rs
//
// Hand-drawn chart renderers, one per ChartData variant. Everything is
// painted into a single allocated rect; no plotting library.

use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Shape, Stroke,
    StrokeKind, pos2, vec2,
};

use crate::chart::{
    ChartData, HeatMapData, LineData, PieData, RadarData, SeriesData,
    TreeMapData, WordCloudData,
};
use crate::gui::app::App;

const BAR_COLOR: Color32 = Color32::from_rgb(0x18, 0x90, 0xff);
const LINE_COLOR: Color32 = Color32::from_rgb(0xff, 0x4d, 0x4f);
const RADAR_COLOR: Color32 = Color32::from_rgb(0x52, 0xc4, 0x1a);
const SCATTER_COLOR: Color32 = Color32::from_rgb(0xfa, 0x8c, 0x16);

const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x18, 0x90, 0xff),
    Color32::from_rgb(0xff, 0x4d, 0x4f),
    Color32::from_rgb(0x52, 0xc4, 0x1a),
    Color32::from_rgb(0xfa, 0x8c, 0x16),
    Color32::from_rgb(0x72, 0x2e, 0xd1),
    Color32::from_rgb(0x13, 0xc2, 0xc2),
    Color32::from_rgb(0xeb, 0x2f, 0x96),
    Color32::from_rgb(0xfa, 0xad, 0x14),
];

/// Theme-dependent colors sampled from the Ui before painting.
struct Style {
    text: Color32,
    weak: Color32,
    grid: Color32,
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = &app.view else { return };
    let chart = &view.chart;

    let head = chart.head();
    ui.strong(head.title.as_str());
    ui.label(egui::RichText::new(head.subtitle.as_str()).weak());

    let style = Style {
        text: ui.visuals().text_color(),
        weak: ui.visuals().weak_text_color(),
        grid: ui.visuals().widgets.noninteractive.bg_stroke.color,
    };

    let size = vec2(ui.available_width().max(240.0), 420.0);
    let (resp, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = resp.rect.shrink(8.0);

    match chart {
        ChartData::WordCloud(d) => word_cloud(&painter, rect, d, &style),
        ChartData::Bar(d) => bars(&painter, rect, d, &style),
        ChartData::Line(d) => line(&painter, rect, d, &style),
        ChartData::Pie(d) => pie(&painter, rect, d, &style),
        ChartData::Radar(d) => radar(&painter, rect, d, &style),
        ChartData::Scatter(d) => scatter(&painter, rect, d, &style),
        ChartData::HeatMap(d) => heat_map(&painter, rect, d, &style),
        ChartData::TreeMap(d) => tree_map(&painter, rect, d, &style),
    }
}

/* ---------------- word cloud ---------------- */

/// Spiral placement around the center, biggest words first (the data is
/// already sorted). Deterministic: the start angle is the golden angle
/// times the word index.
fn word_cloud(painter: &egui::Painter, rect: Rect, d: &WordCloudData, _style: &Style) {
    const GOLDEN_ANGLE: f32 = 2.399_963;

    let center = rect.center();
    let mut placed: Vec<Rect> = Vec::with_capacity(d.words.len());

    for (i, w) in d.words.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let galley = painter.layout_no_wrap(
            w.word.clone(),
            FontId::proportional(w.size),
            color,
        );
        let size = galley.size() + vec2(6.0, 4.0);
        let theta0 = i as f32 * GOLDEN_ANGLE;

        for step in 0..600 {
            let t = step as f32 * 0.05;
            let r = 4.0 + t * 6.0;
            let pos = center + vec2(r * (theta0 + t).cos(), 0.62 * r * (theta0 + t).sin());
            let cand = Rect::from_center_size(pos, size);

            if !rect.contains_rect(cand) {
                // Past the canvas on this arm; keep spiralling.
                if r > rect.width().max(rect.height()) {
                    break;
                }
                continue;
            }
            if placed.iter().any(|p| p.intersects(cand)) {
                continue;
            }

            painter.galley(cand.min + vec2(3.0, 2.0), galley.clone(), color);
            placed.push(cand);
            break;
        }
    }
}

/* ---------------- bar ---------------- */

fn bars(painter: &egui::Painter, rect: Rect, d: &SeriesData, style: &Style) {
    let n = d.words.len().max(1);
    let max = d.counts.iter().copied().max().unwrap_or(1).max(1) as f32;

    let label_w = 110.0;
    let value_w = 44.0;
    let row_h = rect.height() / n as f32;
    let bar_w = (rect.width() - label_w - value_w).max(10.0);
    let font = FontId::proportional((row_h * 0.55).clamp(9.0, 15.0));

    for (i, (word, &count)) in d.words.iter().zip(&d.counts).enumerate() {
        let y = rect.top() + i as f32 * row_h;
        let mid = y + row_h / 2.0;

        painter.text(
            pos2(rect.left() + label_w - 8.0, mid),
            Align2::RIGHT_CENTER,
            word,
            font.clone(),
            style.text,
        );

        let w = count as f32 / max * bar_w;
        let bar = Rect::from_min_size(
            pos2(rect.left() + label_w, y + row_h * 0.15),
            vec2(w, row_h * 0.7),
        );
        painter.rect_filled(bar, CornerRadius::same(2), BAR_COLOR);

        painter.text(
            pos2(bar.right() + 6.0, mid),
            Align2::LEFT_CENTER,
            count,
            font.clone(),
            style.weak,
        );
    }
}

/* ---------------- line / scatter ---------------- */

/// Plot area inside the canvas, leaving room for axis labels.
fn plot_area(rect: Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.left() + 36.0, rect.top() + 10.0),
        pos2(rect.right() - 10.0, rect.bottom() - 36.0),
    )
}

fn series_points(plot: Rect, counts: &[u32], max: f32) -> Vec<Pos2> {
    let n = counts.len();
    let step = if n > 1 { plot.width() / (n - 1) as f32 } else { 0.0 };
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            pos2(
                plot.left() + i as f32 * step,
                plot.bottom() - c as f32 / max * plot.height(),
            )
        })
        .collect()
}

fn draw_axes(painter: &egui::Painter, plot: Rect, max: u32, words: &[String], style: &Style) {
    painter.line_segment(
        [plot.left_top(), plot.left_bottom()],
        Stroke::new(1.0, style.grid),
    );
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, style.grid),
    );

    let small = FontId::proportional(9.0);
    painter.text(
        pos2(plot.left() - 4.0, plot.bottom()),
        Align2::RIGHT_CENTER,
        0,
        small.clone(),
        style.weak,
    );
    painter.text(
        pos2(plot.left() - 4.0, plot.top()),
        Align2::RIGHT_CENTER,
        max,
        small.clone(),
        style.weak,
    );

    // Staggered x labels, two rows, to keep CJK words readable.
    let n = words.len();
    let step = if n > 1 { plot.width() / (n - 1) as f32 } else { 0.0 };
    for (i, word) in words.iter().enumerate() {
        let x = plot.left() + i as f32 * step;
        let y = plot.bottom() + 4.0 + (i % 2) as f32 * 14.0;
        painter.text(pos2(x, y), Align2::CENTER_TOP, word, small.clone(), style.weak);
    }
}

fn line(painter: &egui::Painter, rect: Rect, d: &LineData, style: &Style) {
    let plot = plot_area(rect);
    let max = d.counts.iter().copied().max().unwrap_or(1).max(1);
    let points = series_points(plot, &d.counts, max as f32);

    draw_axes(painter, plot, max, &d.words, style);
    painter.add(Shape::line(points.clone(), Stroke::new(3.0, LINE_COLOR)));

    let font = FontId::proportional(10.0);
    for (at, tag) in [(d.max_at, "max"), (d.min_at, "min")] {
        if let Some(p) = points.get(at) {
            painter.circle_filled(*p, 5.0, LINE_COLOR);
            painter.text(
                *p + vec2(0.0, -8.0),
                Align2::CENTER_BOTTOM,
                format!("{} {}", tag, d.counts[at]),
                font.clone(),
                style.text,
            );
        }
    }
}

fn scatter(painter: &egui::Painter, rect: Rect, d: &SeriesData, style: &Style) {
    let plot = plot_area(rect);
    let max = d.counts.iter().copied().max().unwrap_or(1).max(1);
    let points = series_points(plot, &d.counts, max as f32);

    draw_axes(painter, plot, max, &d.words, style);
    for p in &points {
        painter.circle_filled(*p, 6.0, SCATTER_COLOR);
    }
}

/* ---------------- pie ---------------- */

/// Rose-style pie: slice angle and outer radius both scale with the count.
fn pie(painter: &egui::Painter, rect: Rect, d: &PieData, style: &Style) {
    use std::f32::consts::TAU;

    let legend_w = 150.0_f32.min(rect.width() * 0.35);
    let chart = Rect::from_min_max(rect.min, pos2(rect.right() - legend_w, rect.bottom()));
    let center = chart.center();
    let r_outer = chart.width().min(chart.height()) / 2.0 - 4.0;
    let r_inner = r_outer * 0.3;

    let total: u32 = d.slices.iter().map(|(_, c)| *c).sum();
    let total = total.max(1) as f32;
    let max = d.slices.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f32;

    let mut angle = -TAU / 4.0;
    for (i, (_, count)) in d.slices.iter().enumerate() {
        let sweep = *count as f32 / total * TAU;
        let r = r_inner + *count as f32 / max * (r_outer - r_inner);
        let color = PALETTE[i % PALETTE.len()];

        // Ring segment as a fan of quads; convex pieces tessellate safely.
        let steps = (sweep / 0.15).ceil().max(1.0) as usize;
        for s in 0..steps {
            let a0 = angle + sweep * s as f32 / steps as f32;
            let a1 = angle + sweep * (s + 1) as f32 / steps as f32;
            let quad = vec![
                center + vec2(a0.cos(), a0.sin()) * r_inner,
                center + vec2(a0.cos(), a0.sin()) * r,
                center + vec2(a1.cos(), a1.sin()) * r,
                center + vec2(a1.cos(), a1.sin()) * r_inner,
            ];
            painter.add(Shape::convex_polygon(quad, color, Stroke::NONE));
        }
        angle += sweep;
    }

    // Legend column on the right; capped so it never overflows the canvas.
    let font = FontId::proportional(11.0);
    let max_rows = ((rect.height() / 18.0) as usize).max(1);
    let shown = d.slices.len().min(max_rows);
    for (i, (word, count)) in d.slices.iter().take(shown).enumerate() {
        let y = rect.top() + 4.0 + i as f32 * 18.0;
        let swatch = Rect::from_min_size(pos2(rect.right() - legend_w, y), vec2(10.0, 10.0));
        painter.rect_filled(swatch, CornerRadius::same(2), PALETTE[i % PALETTE.len()]);
        painter.text(
            pos2(swatch.right() + 6.0, y + 5.0),
            Align2::LEFT_CENTER,
            format!("{} ({})", word, count),
            font.clone(),
            style.text,
        );
    }
    if shown < d.slices.len() {
        let y = rect.top() + 4.0 + shown as f32 * 18.0;
        painter.text(
            pos2(rect.right() - legend_w, y),
            Align2::LEFT_TOP,
            "...",
            font,
            style.weak,
        );
    }
}

/* ---------------- radar ---------------- */

fn radar(painter: &egui::Painter, rect: Rect, d: &RadarData, style: &Style) {
    use std::f32::consts::TAU;

    let n = d.axes.len();
    if n == 0 {
        return;
    }

    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0 - 30.0;
    let dir = |i: usize| {
        let a = -TAU / 4.0 + i as f32 / n as f32 * TAU;
        vec2(a.cos(), a.sin())
    };

    // Grid rings + spokes
    for level in 1..=4 {
        let r = radius * level as f32 / 4.0;
        let ring: Vec<Pos2> = (0..n).map(|i| center + dir(i) * r).collect();
        painter.add(Shape::closed_line(ring, Stroke::new(1.0, style.grid)));
    }
    let font = FontId::proportional(11.0);
    for (i, axis) in d.axes.iter().enumerate() {
        painter.line_segment([center, center + dir(i) * radius], Stroke::new(1.0, style.grid));
        painter.text(
            center + dir(i) * (radius + 16.0),
            Align2::CENTER_CENTER,
            axis,
            font.clone(),
            style.text,
        );
    }

    // Value polygon: star-shaped around the center, so a triangle fan fills
    // it correctly even when it isn't convex.
    let max = d.axis_max.max(1) as f32;
    let verts: Vec<Pos2> = d
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| center + dir(i) * (v as f32 / max * radius))
        .collect();

    let fill = Color32::from_rgba_unmultiplied(0x52, 0xc4, 0x1a, 60);
    if verts.len() >= 3 {
        for i in 0..verts.len() {
            let j = (i + 1) % verts.len();
            painter.add(Shape::convex_polygon(
                vec![center, verts[i], verts[j]],
                fill,
                Stroke::NONE,
            ));
        }
    }
    painter.add(Shape::closed_line(verts.clone(), Stroke::new(2.0, RADAR_COLOR)));
    for v in &verts {
        painter.circle_filled(*v, 3.0, RADAR_COLOR);
    }
}

/* ---------------- heat map ---------------- */

fn heat_color(t: f32) -> Color32 {
    // white → deep blue
    let t = t.clamp(0.0, 1.0);
    let r = 255.0 - t * (255.0 - 0x18 as f32);
    let g = 255.0 - t * (255.0 - 0x90 as f32);
    Color32::from_rgb(r as u8, g as u8, 0xff)
}

fn heat_map(painter: &egui::Painter, rect: Rect, d: &HeatMapData, style: &Style) {
    let cell_w = rect.width() / d.cols as f32;
    let cell_h = rect.height() / d.rows as f32;
    let span = d.max.saturating_sub(d.min).max(1) as f32;
    let font = FontId::proportional(13.0);
    let small = FontId::proportional(10.0);

    for cell in &d.cells {
        let min = pos2(
            rect.left() + cell.col as f32 * cell_w,
            rect.top() + cell.row as f32 * cell_h,
        );
        let r = Rect::from_min_size(min, vec2(cell_w, cell_h)).shrink(2.0);

        if cell.word.is_empty() {
            // Placeholder cell padded in when fewer than rows×cols words
            // cleared the threshold.
            painter.rect_stroke(
                r,
                CornerRadius::same(2),
                Stroke::new(1.0, style.grid),
                StrokeKind::Inside,
            );
            continue;
        }

        let t = (cell.count - d.min) as f32 / span;
        painter.rect_filled(r, CornerRadius::same(2), heat_color(t));

        let ink = if t > 0.55 { Color32::WHITE } else { Color32::from_rgb(40, 40, 40) };
        painter.text(
            r.center() - vec2(0.0, 8.0),
            Align2::CENTER_CENTER,
            &cell.word,
            font.clone(),
            ink,
        );
        painter.text(
            r.center() + vec2(0.0, 10.0),
            Align2::CENTER_CENTER,
            cell.count,
            small.clone(),
            ink,
        );
    }
}

/* ---------------- tree map ---------------- */

/// Slice layout: each leaf takes its value's share of the remaining rect
/// along the longer side. Area-exact and deterministic.
fn tree_map(painter: &egui::Painter, rect: Rect, d: &TreeMapData, _style: &Style) {
    let leaves = &d.root.children;
    let mut remaining: f32 = leaves
        .iter()
        .map(|n| n.value.unwrap_or(0) as f32)
        .sum();
    if remaining <= 0.0 {
        return;
    }

    let mut free = rect;
    let font = FontId::proportional(12.0);
    let small = FontId::proportional(9.0);

    for (i, leaf) in leaves.iter().enumerate() {
        let v = leaf.value.unwrap_or(0) as f32;
        let frac = (v / remaining).clamp(0.0, 1.0);

        let cell = if free.width() >= free.height() {
            let w = free.width() * frac;
            let c = Rect::from_min_size(free.min, vec2(w, free.height()));
            free = Rect::from_min_max(pos2(free.left() + w, free.top()), free.max);
            c
        } else {
            let h = free.height() * frac;
            let c = Rect::from_min_size(free.min, vec2(free.width(), h));
            free = Rect::from_min_max(pos2(free.left(), free.top() + h), free.max);
            c
        };
        remaining -= v;

        painter.rect_filled(cell, CornerRadius::ZERO, PALETTE[i % PALETTE.len()]);
        painter.rect_stroke(
            cell,
            CornerRadius::ZERO,
            Stroke::new(2.0, Color32::WHITE),
            StrokeKind::Inside,
        );

        if cell.width() > 44.0 && cell.height() > 26.0 {
            painter.text(
                cell.center() - vec2(0.0, 6.0),
                Align2::CENTER_CENTER,
                &leaf.name,
                font.clone(),
                Color32::WHITE,
            );
            painter.text(
                cell.center() + vec2(0.0, 8.0),
                Align2::CENTER_CENTER,
                leaf.value.unwrap_or(0),
                small.clone(),
                Color32::WHITE,
            );
        }
    }
}
