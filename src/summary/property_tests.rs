//! Property tests for summary module

use proptest::prelude::*;

use crate::config::SummaryLayout;
use crate::summary::{extract_summary, try_extract_summary};

fn cell_strategy() -> impl Strategy<Value = String> {
    "[0-9A-Za-z.%Ξ]{0,6}"
}

proptest! {
    /// Fewer than four non-empty lines always yields both figures absent
    #[test]
    fn prop_short_sheet_is_empty(lines in prop::collection::vec("[a-z]{1,3},[0-9]{1,3}", 0..4)) {
        let text = lines.join("\n");
        let layout = SummaryLayout::default();

        prop_assert!(try_extract_summary(&text, &layout).is_err());
        prop_assert!(extract_summary(&text, &layout).is_empty());
    }

    /// The figures are exactly the (2,1) and (3,1) cells, absent when empty
    #[test]
    fn prop_reads_fixed_cells(
        count in cell_strategy(),
        price in cell_strategy(),
        extra in prop::collection::vec("[a-z]{1,3},[0-9]{1,3}", 0..5)
    ) {
        let mut text = format!("h,v\nmemo,x\n保有者数,{}\n最安価格,{}\n", count, price);
        for line in &extra {
            text.push_str(line);
            text.push('\n');
        }

        let figures = extract_summary(&text, &SummaryLayout::default());
        let expect = |v: &String| if v.is_empty() { None } else { Some(v.clone()) };
        prop_assert_eq!(figures.member_count, expect(&count));
        prop_assert_eq!(figures.floor_price, expect(&price));
    }
}
