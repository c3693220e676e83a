// src/gui/fonts.rs
use eframe::egui;

/// System fonts with CJK coverage, first readable wins.
const CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-zenhei/wqy-zenhei.ttc",
];

/// egui's bundled fonts carry no CJK glyphs; append a system font as
/// fallback so Chinese words render instead of boxes.
pub fn install(ctx: &egui::Context) {
    for path in CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else { continue };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert(s!("cjk"), egui::FontData::from_owned(bytes).into());
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(s!("cjk"));
        }
        ctx.set_fonts(fonts);
        logf!("Fonts: using {}", path);
        return;
    }
    logd!("Fonts: no CJK system font found; glyphs may be missing");
}
