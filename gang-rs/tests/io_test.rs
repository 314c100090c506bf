#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use gang_rs::entities::Shape;
    use gang_rs::io::ext_repr::{ExtJob, ExtShape};
    use gang_rs::io::{export, import};
    use gang_rs::pack::Strategy;
    use gang_rs::util::{PackingMode, SheetConfig};

    const JOB: &str = r#"{
        "name": "mixed",
        "designs": [
            { "id": "dot", "width": 4.0, "height": 4.0, "quantity": 3, "label": "Dot", "shape": "round" },
            { "id": "tag", "width": 4.0, "height": 4.0, "quantity": 1, "label": "Tag", "shape": "box" }
        ]
    }"#;

    #[test]
    fn import_job() {
        let ext_job: ExtJob = serde_json::from_str(JOB).unwrap();
        let requests = import::import(&ext_job).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].id, "dot");
        assert_eq!(requests[0].shape, Shape::Round);
        assert_eq!(requests[0].quantity, 3);
        assert_eq!(requests[1].label, "Tag");
        assert_eq!(requests[1].shape, Shape::Box);
    }

    #[test]
    fn shape_is_required() {
        let json = r#"{ "id": "a", "width": 1.0, "height": 1.0, "quantity": 1, "label": "A" }"#;
        assert!(serde_json::from_str::<gang_rs::io::ext_repr::ExtDesign>(json).is_err());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let json = r#"{ "id": "a", "width": 1.0, "height": 1.0, "quantity": 1, "label": "A", "shape": "star" }"#;
        assert!(serde_json::from_str::<gang_rs::io::ext_repr::ExtDesign>(json).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut ext_job: ExtJob = serde_json::from_str(JOB).unwrap();
        ext_job.designs[1].id = "dot".into();

        let err = import::import(&ext_job).unwrap_err();
        assert!(err.to_string().contains("dot"));
    }

    #[test]
    fn export_solution() {
        let ext_job: ExtJob = serde_json::from_str(JOB).unwrap();
        let requests = import::import(&ext_job).unwrap();
        let config = SheetConfig::default();
        let layout = Strategy::Dispatch
            .pack(&requests, &config, PackingMode::Tight)
            .unwrap();

        let solution = export::export(&layout);
        assert_eq!(solution.n_sheets, 1);
        assert_eq!(solution.n_placed, 4);
        assert_eq!(solution.sheet_width, 22.0);
        assert!(approx_eq!(f64, solution.total_used_height, 6.0));
        assert!(approx_eq!(f64, solution.density, 4.0 * 16.0 / (22.0 * 6.0)));

        let sheet = &solution.sheets[0];
        assert_eq!(sheet.index, 0);
        assert!(approx_eq!(f64, sheet.density, solution.density));

        let tag = sheet.placements.iter().find(|p| p.id == "tag-0").unwrap();
        assert_eq!(tag.shape, ExtShape::Box);
        assert_eq!(tag.label, "Tag");
        assert_eq!((tag.x, tag.y, tag.width, tag.height), (17.0, 1.0, 4.0, 4.0));

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["sheets"][0]["placements"][0]["shape"], "round");
    }
}
