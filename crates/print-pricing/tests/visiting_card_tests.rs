use print_pricing::*;

fn standard_job() -> VisitingCardConfiguration {
    VisitingCardConfiguration {
        total_quantity: 1000,
        colors: 1,
        side_selection: SideSelection::Single,
        matt_lamination: false,
        spot_uv: false,
        cutting_type: CuttingType::Regular,
        design_fee: 0.0,
        profit_margin: 0.0,
        ..Default::default()
    }
}

#[test]
fn test_wastage_table() {
    assert_eq!(wastage_sheets(1), 2);
    assert_eq!(wastage_sheets(2), 3);
    assert_eq!(wastage_sheets(3), 4);
    assert_eq!(wastage_sheets(4), 5);

    // Unsupported color counts get no wastage allowance
    assert_eq!(wastage_sheets(0), 0);
    assert_eq!(wastage_sheets(5), 0);
    assert_eq!(wastage_sheets(255), 0);
}

#[test]
fn test_standard_job_breakdown() {
    let b = compute_visiting_card(&standard_job());

    assert_eq!(b.sheets_required, 13);
    assert_eq!(b.wastage_sheets, 2);
    assert_eq!(b.total_sheets, 15);
    assert_eq!(b.sheet_cost, 180.0);
    assert_eq!(b.wastage_cost, 24.0);
    assert_eq!(b.plate_cost, 120.0);
    assert_eq!(b.printing_cost, 300.0);
    assert_eq!(b.matt_cost, 0.0);
    assert_eq!(b.spot_cost, 0.0);
    assert_eq!(b.film_cost, 0.0);
    assert_eq!(b.cutting_cost, 25.0);
    assert_eq!(b.packaging_cost, 50.0);
    assert_eq!(b.total_production_cost, 675.0);
    assert_eq!(b.final_price, 675.0);
}

#[test]
fn test_total_sheets_include_wastage() {
    for colors in 0..=6 {
        let config = VisitingCardConfiguration {
            colors,
            total_quantity: 470,
            ..Default::default()
        };
        let b = compute_visiting_card(&config);
        assert_eq!(b.sheets_required, 6); // 470 / 80 = 5.875
        assert_eq!(b.total_sheets, b.sheets_required + b.wastage_sheets);
        assert_eq!(b.sheet_cost, b.total_sheets as f64 * 12.0);
    }
}

#[test]
fn test_plate_and_printing_scale_with_colors() {
    let config = VisitingCardConfiguration {
        colors: 4,
        ..standard_job()
    };
    let b = compute_visiting_card(&config);
    assert_eq!(b.plate_cost, 480.0);
    assert_eq!(b.printing_cost, 1200.0);
    assert_eq!(b.wastage_sheets, 5);
}

#[test]
fn test_matt_lamination_floors_at_minimum() {
    let config = VisitingCardConfiguration {
        matt_lamination: true,
        ..standard_job()
    };
    let b = compute_visiting_card(&config);
    // 11 * 14 * 0.006 * 13 ≈ 12.01, below the 300 minimum
    assert_eq!(b.matt_cost, 300.0);
    assert_eq!(b.total_production_cost, 975.0);
}

#[test]
fn test_matt_lamination_large_run() {
    // 40000 cards -> 500 sheets; 154 * 0.006 * 500 = 462
    let single = VisitingCardConfiguration {
        total_quantity: 40_000,
        matt_lamination: true,
        ..standard_job()
    };
    let b = compute_visiting_card(&single);
    assert_eq!(b.sheets_required, 500);
    assert!((b.matt_cost - 462.0).abs() < 1e-9);

    let both = VisitingCardConfiguration {
        side_selection: SideSelection::Both,
        ..single
    };
    let b = compute_visiting_card(&both);
    assert!((b.matt_cost - 924.0).abs() < 1e-9);
}

#[test]
fn test_spot_uv_adds_film() {
    let config = VisitingCardConfiguration {
        spot_uv: true,
        ..standard_job()
    };
    let b = compute_visiting_card(&config);
    assert_eq!(b.spot_cost, 300.0);
    assert_eq!(b.film_cost, 350.0);
    assert_eq!(b.matt_cost, 0.0);
    assert_eq!(b.total_production_cost, 675.0 + 300.0 + 350.0);
}

#[test]
fn test_spot_uv_both_sides_above_minimum() {
    // 32000 cards -> 400 sheets; 154 * 0.007 * 400 * 2 = 862.4
    let config = VisitingCardConfiguration {
        total_quantity: 32_000,
        spot_uv: true,
        side_selection: SideSelection::Both,
        ..standard_job()
    };
    let b = compute_visiting_card(&config);
    assert!((b.spot_cost - 862.4).abs() < 1e-9);
    assert_eq!(b.film_cost, 350.0);
}

#[test]
fn test_cutting_and_packaging_are_proportional() {
    let config = VisitingCardConfiguration {
        total_quantity: 250,
        cutting_type: CuttingType::Dye,
        ..standard_job()
    };
    let b = compute_visiting_card(&config);
    assert_eq!(b.cutting_cost, 12.5);
    assert_eq!(b.packaging_cost, 12.5);

    let regular = VisitingCardConfiguration {
        cutting_type: CuttingType::Regular,
        ..config
    };
    assert_eq!(compute_visiting_card(&regular).cutting_cost, 6.25);
}

#[test]
fn test_design_fee_and_margin() {
    let config = VisitingCardConfiguration {
        design_fee: 325.0,
        profit_margin: 20.0,
        ..standard_job()
    };
    let b = compute_visiting_card(&config);
    assert_eq!(b.total_production_cost, 1000.0);
    assert_eq!(b.final_price, 1200.0);
}

#[test]
fn test_margin_is_monotonic() {
    let mut config = standard_job();
    let mut previous = compute_visiting_card(&config).final_price;
    for margin in [1.0, 5.0, 12.5, 50.0, 100.0, 250.0] {
        config.profit_margin = margin;
        let price = compute_visiting_card(&config).final_price;
        assert!(price > previous, "margin {} did not raise price", margin);
        previous = price;
    }
}

#[test]
fn test_compute_is_idempotent() {
    let config = VisitingCardConfiguration {
        total_quantity: 1234,
        colors: 3,
        side_selection: SideSelection::Both,
        matt_lamination: true,
        spot_uv: true,
        cutting_type: CuttingType::Dye,
        design_fee: 99.5,
        profit_margin: 17.25,
        ..Default::default()
    };
    let first = compute_visiting_card(&config);
    let second = compute_visiting_card(&config);
    assert_eq!(first, second);
    assert_eq!(first.final_price.to_bits(), second.final_price.to_bits());
}

#[test]
fn test_informational_fields_do_not_affect_price() {
    let base = compute_visiting_card(&standard_job());
    let config = VisitingCardConfiguration {
        paper_type: "Glossy Paper".to_string(),
        sheet_width: 20.0,
        sheet_height: 30.0,
        card_width: 3.0,
        card_height: 1.5,
        ..standard_job()
    };
    assert_eq!(compute_visiting_card(&config), base);
}

#[test]
fn test_price_per_unit() {
    let b = compute_visiting_card(&standard_job());
    assert_eq!(b.price_per_unit().unwrap(), 0.675);
}

#[test]
fn test_zero_quantity() {
    let config = VisitingCardConfiguration {
        total_quantity: 0,
        ..standard_job()
    };
    // Pricing still succeeds; only the per-unit split is refused
    let b = compute_visiting_card(&config);
    assert_eq!(b.sheets_required, 0);
    assert_eq!(b.total_sheets, 2);
    assert_eq!(b.cutting_cost, 0.0);

    match b.price_per_unit() {
        Err(PricingError::InvalidConfiguration(msg)) => assert!(msg.contains("quantity of 0")),
        other => panic!("Expected InvalidConfiguration, got {:?}", other),
    }
}
