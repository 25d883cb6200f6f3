use chart_sketch::chart::{
    BarLineChartOptions, ScatterChartOptions, ScatterPresentation, build_bar_line_figure,
    build_scatter_figures,
};
use chart_sketch::data::{CropFilter, Record, WideTable};
use proptest::prelude::*;

const AREAS: [&str; 2] = ["Ghana", "Côte d'Ivoire"];
const ELEMENTS: [&str; 3] = ["Area harvested", "Yield", "Production"];

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        1961i32..2021,
        0usize..AREAS.len(),
        0usize..ELEMENTS.len(),
        prop::option::of(0.0f64..10_000_000.0),
    )
        .prop_map(|(year, area, element, value)| {
            Record::new(year, AREAS[area], "Cocoa, beans", ELEMENTS[element], value)
        })
}

proptest! {
    #[test]
    fn chart_frames_are_deterministic_and_valid(
        records in prop::collection::vec(record_strategy(), 0..64),
        combined in any::<bool>()
    ) {
        let subset = CropFilter::default().apply(&WideTable::pivot(&records));
        let scatter_options = ScatterChartOptions {
            presentation: if combined {
                ScatterPresentation::Combined
            } else {
                ScatterPresentation::PerCountry
            },
            ..ScatterChartOptions::default()
        };

        let first = build_scatter_figures(&subset, &scatter_options).expect("scatter");
        let second = build_scatter_figures(&subset, &scatter_options).expect("scatter again");
        prop_assert_eq!(&first, &second);
        for figure in &first {
            prop_assert!(figure.frame.validate().is_ok());
        }

        let bars = build_bar_line_figure(&subset, &BarLineChartOptions::default()).expect("bars");
        prop_assert!(bars.frame.validate().is_ok());
        prop_assert!(bars.frame.rects().all(|rect| rect.height >= 0.0 && rect.width >= 0.0));
    }
}
