#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use gang_rs::entities::{DesignRequest, PackedSheet, Shape};
    use gang_rs::pack::max_rects::max_rects_pack;
    use gang_rs::pack::shelf::shelf_pack;
    use gang_rs::util::{SheetConfig, assertions};
    use test_case::test_case;

    fn boxed(id: &str, width: f64, height: f64, quantity: usize) -> DesignRequest {
        DesignRequest::new(id, width, height, quantity, id, Shape::Box)
    }

    fn total_used(sheets: &[PackedSheet]) -> f64 {
        sheets.iter().map(|s| s.used_height).sum()
    }

    fn apparel() -> Vec<DesignRequest> {
        vec![
            boxed("front", 11.0, 12.5, 6),
            boxed("sleeve", 3.5, 9.0, 12),
            boxed("pocket", 4.0, 4.0, 20),
            boxed("neck", 3.0, 1.5, 30),
        ]
    }

    fn mixed_sizes() -> Vec<DesignRequest> {
        vec![
            boxed("a", 8.0, 4.0, 5),
            boxed("b", 1.0, 8.0, 3),
            boxed("c", 7.0, 5.0, 3),
            boxed("d", 7.0, 6.0, 2),
        ]
    }

    fn small_and_large() -> Vec<DesignRequest> {
        vec![boxed("large", 5.0, 5.0, 9), boxed("small", 1.0, 1.0, 17)]
    }

    #[test]
    fn single_unit() {
        let sheets = max_rects_pack(&[boxed("a", 4.0, 4.0, 1)], &SheetConfig::default()).unwrap();

        assert_eq!(sheets.len(), 1);
        let p = &sheets[0].placements[0];
        assert_eq!((p.x, p.y), (1.0, 1.0));
        assert!(approx_eq!(f64, sheets[0].used_height, 6.0));
    }

    #[test]
    fn uniform_boxes_fill_rows() {
        let sheets = max_rects_pack(&[boxed("a", 4.0, 4.0, 13)], &SheetConfig::default()).unwrap();

        assert_eq!(sheets.len(), 1);
        assert!(approx_eq!(f64, sheets[0].used_height, 21.0));
    }

    #[test]
    fn short_units_fill_space_beside_a_tall_one() {
        let requests = vec![boxed("tall", 4.0, 20.0, 1), boxed("small", 4.0, 4.0, 8)];
        let config = SheetConfig::default();

        let max_rects = max_rects_pack(&requests, &config).unwrap();
        let shelf = shelf_pack(&requests, &config).unwrap();

        assert_eq!(max_rects.len(), 1);
        assert!(approx_eq!(f64, max_rects[0].used_height, 22.0));
        assert!(approx_eq!(f64, shelf[0].used_height, 32.0));
        //nothing is placed below the tall unit
        assert!(max_rects[0].placements.iter().all(|p| p.y + p.height <= 21.0 + 1e-9));
    }

    #[test]
    fn never_worse_than_shelf() {
        //Best-Short-Side-Fit stacks the 8x2 units in a column next to the 7x4 one
        let requests = vec![boxed("a", 7.0, 4.0, 1), boxed("b", 8.0, 2.0, 5)];
        let config = SheetConfig::default();

        let max_rects = max_rects_pack(&requests, &config).unwrap();
        let shelf = shelf_pack(&requests, &config).unwrap();

        assert!(approx_eq!(f64, total_used(&shelf), 12.0));
        assert_eq!(max_rects, shelf);
    }

    #[test_case(apparel(); "apparel")]
    #[test_case(mixed_sizes(); "mixed sizes")]
    #[test_case(small_and_large(); "small and large")]
    fn rect_density_ordering(requests: Vec<DesignRequest>) {
        let config = SheetConfig::default();
        let max_rects = max_rects_pack(&requests, &config).unwrap();
        let shelf = shelf_pack(&requests, &config).unwrap();

        assert!(total_used(&max_rects) <= total_used(&shelf) + 1e-6);
    }

    #[test]
    fn strictly_denser_on_small_and_large() {
        let config = SheetConfig::default();
        let requests = small_and_large();

        let max_rects = max_rects_pack(&requests, &config).unwrap();
        let shelf = shelf_pack(&requests, &config).unwrap();

        assert!(approx_eq!(f64, total_used(&max_rects), 21.0));
        assert!(approx_eq!(f64, total_used(&shelf), 23.0));
    }

    #[test]
    fn bins_are_filled_first_fit() {
        let config = SheetConfig::new(22.0, 1.0, 12.0);
        let sheets = max_rects_pack(&[boxed("a", 4.0, 4.0, 20)], &config).unwrap();

        assert_eq!(sheets.iter().map(|s| s.len()).collect::<Vec<_>>(), [8, 8, 4]);
        assert!(sheets.iter().all(|s| approx_eq!(f64, s.used_height, 11.0)));
    }

    #[test_case(apparel(), SheetConfig::default(); "apparel")]
    #[test_case(apparel(), SheetConfig::new(22.0, 0.25, 30.0); "apparel short sheets")]
    #[test_case(mixed_sizes(), SheetConfig::new(13.0, 0.5, 24.0); "mixed sizes narrow roll")]
    #[test_case(small_and_large(), SheetConfig::new(24.0, 0.0, 10.0); "no margin")]
    fn layout_invariants(requests: Vec<DesignRequest>, config: SheetConfig) {
        let sheets = max_rects_pack(&requests, &config).unwrap();

        assert!(assertions::placements_conserved(&requests, &sheets));
        for sheet in &sheets {
            assert!(!sheet.is_empty());
            assert!(assertions::sheet_within_bounds(sheet, &config));
            assert!(assertions::boxes_separated(sheet, config.margin));
        }
    }

    #[test]
    fn lightly_filled_bin_reports_content_extent() {
        let requests = vec![boxed("a", 10.0, 3.0, 1), boxed("b", 2.0, 2.0, 1)];
        let sheets = max_rects_pack(&requests, &SheetConfig::default()).unwrap();

        assert_eq!(sheets.len(), 1);
        assert!(approx_eq!(f64, sheets[0].used_height, 5.0));
    }

    #[test]
    fn deterministic() {
        let config = SheetConfig::default();
        assert_eq!(
            max_rects_pack(&apparel(), &config),
            max_rects_pack(&apparel(), &config)
        );
    }
}
