//! Lays out the search screen's subject chips at a few container widths.
//!
//! Run with `RUST_LOG=debug cargo run -p tagflow-text --example course_tags`.

use tagflow::{FlowLayout, TagCloud, TagStyle};
use tagflow_text::CosmicMeasurer;

const SUBJECTS: [&str; 10] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Computer Science",
    "Economics",
    "History",
    "Geography",
    "English",
    "Psychology",
];

fn main() {
    env_logger::init();

    let mut measurer = CosmicMeasurer::new();
    let cloud = TagCloud::from_labels(SUBJECTS, TagStyle::search())
        .with_layout(FlowLayout::new().with_spacing(8.0));

    for max_width in [240.0, 360.0, f32::INFINITY] {
        match cloud.layout(max_width, &mut measurer) {
            Ok(layout) => {
                println!(
                    "width {max_width}: {} rows, bounds {}x{}",
                    layout.row_count, layout.size.width, layout.size.height
                );
                for (tag, rect) in cloud.tags().iter().zip(&layout.rects) {
                    println!(
                        "  {:<18} at ({:>6.1}, {:>6.1})",
                        tag.label(),
                        rect.min[0],
                        rect.min[1]
                    );
                }
            }
            Err(e) => log::error!("layout failed: {e}"),
        }
    }

    let query = "ic";
    let filtered = cloud.filter(query);
    log::info!(
        "filter {query:?} keeps {} of {} tags",
        filtered.len(),
        cloud.len()
    );
    if let Some(index) = cloud.selected("Physics") {
        log::info!("selected tag: {}", cloud.tags()[index].label());
    }
}
