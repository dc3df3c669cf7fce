#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

use bucketmap::{BucketMap, ChainStats, TableConfig};
use plotters::prelude::*;
use rand::Rng;

const MAX_ENTRIES: usize = 200_000;
const NUM_SAMPLES: usize = 20;
const INITIAL_CAPACITY: usize = 16;
const LOAD_FACTORS: [f64; 4] = [0.5, 1.0, 2.0, 4.0];
const OUTPUT: &str = "chain_lengths.png";

/// Fills one map per load factor with random keys, sampling chain statistics
/// at evenly spaced entry counts.
fn collect(keys: &[u64]) -> Result<Vec<Vec<ChainStats>>, bucketmap::Error> {
    let step = MAX_ENTRIES / NUM_SAMPLES;
    let mut samples = Vec::with_capacity(LOAD_FACTORS.len());

    for &load_factor in &LOAD_FACTORS {
        let config = TableConfig::default()
            .with_initial_capacity(INITIAL_CAPACITY)
            .with_load_factor(load_factor);
        let mut map = BucketMap::with_config(config)?;
        let mut series = Vec::with_capacity(NUM_SAMPLES);

        for (inserted, &key) in keys.iter().enumerate() {
            map.put(key, inserted);
            if (inserted + 1) % step == 0 {
                series.push(map.chain_stats());
            }
        }

        if let Some(last) = series.last() {
            println!("  load factor {load_factor}: {last}");
        }
        samples.push(series);
    }

    Ok(samples)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args().nth(1).unwrap_or_else(|| OUTPUT.to_string());

    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..MAX_ENTRIES).map(|_| rng.random()).collect();

    println!("Inserting {MAX_ENTRIES} random keys for load factors {LOAD_FACTORS:?}");
    let samples = collect(&keys)?;

    let colors = [
        RGBColor(220, 50, 50),
        RGBColor(50, 90, 220),
        RGBColor(50, 180, 50),
        RGBColor(180, 50, 180),
    ];
    let font_family = "sans-serif";

    let max_longest = samples
        .iter()
        .flat_map(|series| series.iter().map(|stats| stats.longest_chain))
        .max()
        .unwrap_or(1) as f64 *
        1.1;

    let root = BitMapBackend::new(&output, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let mut mean_chart = ChartBuilder::on(&areas[0])
        .caption("Mean Chain Length of Occupied Slots", (font_family, 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..MAX_ENTRIES, 0.0..(LOAD_FACTORS[3] * 1.5))?;
    mean_chart
        .configure_mesh()
        .x_desc("Entries")
        .y_desc("Mean chain length")
        .axis_desc_style((font_family, 16))
        .draw()?;

    let mut longest_chart = ChartBuilder::on(&areas[1])
        .caption("Longest Chain", (font_family, 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..MAX_ENTRIES, 0.0..max_longest)?;
    longest_chart
        .configure_mesh()
        .x_desc("Entries")
        .y_desc("Longest chain")
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (index, series) in samples.iter().enumerate() {
        let color = colors[index % colors.len()];
        let style = ShapeStyle::from(&color).stroke_width(2);
        let label = format!("load factor {}", LOAD_FACTORS[index]);

        mean_chart
            .draw_series(LineSeries::new(
                series.iter().map(|stats| (stats.entries, stats.mean_chain_length())),
                style,
            ))?
            .label(label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        longest_chart
            .draw_series(LineSeries::new(
                series.iter().map(|stats| (stats.entries, stats.longest_chain as f64)),
                style,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    mean_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    longest_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    println!("Wrote {output}");

    Ok(())
}
