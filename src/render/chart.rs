//! Department distribution bar chart (PNG).

use crate::dataset::EmployeeRecord;
use crate::error::{ReportError, Result};
use crate::stats;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::fs;
use std::path::Path;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 600;

pub const TITLE: &str = "Department Distribution of Employees";

const FONT_FAMILY: &str = "sans-serif";
static FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Qualitative "Set2" palette; bars cycle through it in order.
pub const PALETTE: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

/// Render the chart and write it to `output_path`, replacing any existing file.
///
/// The PNG is fully encoded before the file is touched.
pub fn render_department_distribution(
    dataset: &[EmployeeRecord],
    output_path: &Path,
) -> Result<()> {
    let png = render_department_png(dataset)?;
    fs::write(output_path, &png).map_err(|e| ReportError::io(output_path, e))
}

/// Render one bar per distinct department (first-seen order) as PNG bytes.
///
/// An empty dataset yields a valid chart with axes and no bars.
pub fn render_department_png(dataset: &[EmployeeRecord]) -> Result<Vec<u8>> {
    plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, FONT)
        .map_err(|_| ReportError::Render("embedded font could not be parsed".to_string()))?;

    let counts = stats::department_counts(dataset);
    let names: Vec<&str> = counts.iter().map(|(name, _)| name.as_str()).collect();

    let slots = counts.len().max(1) as u32;
    let max_count = counts.iter().map(|(_, n)| *n as u32).max().unwrap_or(0);
    let y_top = (max_count + max_count / 10 + 1).max(1);

    let mut buffer = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(ReportError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, (FONT_FAMILY, 22))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d((0u32..slots).into_segmented(), 0u32..y_top)
            .map_err(ReportError::render)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(slots as usize)
            .x_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => names
                    .get(*i as usize)
                    .map(|name| name.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .x_desc("Department")
            .y_desc("Count")
            .axis_desc_style((FONT_FAMILY, 16))
            .draw()
            .map_err(ReportError::render)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .margin(12)
                    .style_func(|x: &SegmentValue<u32>, _: &u32| match x {
                        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                            PALETTE[*i as usize % PALETTE.len()].filled()
                        }
                        SegmentValue::Last => PALETTE[0].filled(),
                    })
                    .data(
                        counts
                            .iter()
                            .enumerate()
                            .map(|(i, (_, n))| (i as u32, *n as u32)),
                    ),
            )
            .map_err(ReportError::render)?;

        root.present().map_err(ReportError::render)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&buffer, WIDTH, HEIGHT, ExtendedColorType::Rgb8)
        .map_err(ReportError::render)?;

    Ok(png)
}
