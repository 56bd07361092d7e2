//! Export round-trip tests: CSV shape and precision, JSON fidelity.

use techflow_core::{
    export::{ExportData, DECISIONS_CSV_HEADER, METRICS_CSV_HEADER},
    DecisionInput, SimulationController, TOTAL_QUARTERS,
};

fn played(seed: u64, quarters: u32) -> SimulationController {
    let mut c = SimulationController::new(seed);
    c.start().expect("start");
    for _ in 0..quarters {
        c.submit_decision(DecisionInput::default()).expect("submit");
        c.advance_quarter().expect("advance");
    }
    c
}

#[test]
fn metrics_csv_shape() {
    let c = played(42, 3);
    let csv = c.export_metrics_csv();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "Quarter,Revenue,Gross Margin,Net Profit,Market Share,\
         Customer Satisfaction,Cash Position,Employee Productivity"
    );
    assert_eq!(lines[0], METRICS_CSV_HEADER);
    assert_eq!(lines.len(), 4, "header plus one row per completed quarter");

    for (i, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], (i + 1).to_string());

        // Dollar and percentage columns carry exactly 2 decimals.
        for col in [1, 2, 3, 4, 6] {
            let (_, decimals) = fields[col].split_once('.').expect("decimal point");
            assert_eq!(decimals.len(), 2, "column {col} in {line:?}");
        }
        // Index columns are whole numbers.
        for col in [5, 7] {
            assert!(!fields[col].contains('.'), "column {col} in {line:?}");
        }
    }
}

#[test]
fn decisions_csv_shape() {
    let c = played(42, 2);
    let csv = c.export_decisions_csv();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], DECISIONS_CSV_HEADER);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "1,50.00,50.00,100.00,50.00");
    assert_eq!(lines[2], "2,50.00,50.00,100.00,50.00");
}

#[test]
fn empty_run_exports_header_only() {
    let c = SimulationController::new(1);
    assert_eq!(c.export_metrics_csv(), format!("{METRICS_CSV_HEADER}\n"));
    assert_eq!(c.export_decisions_csv(), format!("{DECISIONS_CSV_HEADER}\n"));
}

#[test]
fn json_round_trips_at_full_precision() {
    let c = played(7, TOTAL_QUARTERS);
    let json = c.export_json().expect("export");

    let parsed: ExportData = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed.history.as_slice(), c.history());
    assert_eq!(parsed.decisions.as_slice(), c.decision_history());
    assert_eq!(parsed.current_quarter, TOTAL_QUARTERS);

    // History includes the seeded quarter 0, unrounded.
    assert_eq!(parsed.history[0].quarter, 0);
    assert_eq!(parsed.history[0].revenue, 50.0);
}

#[test]
fn json_uses_camel_case_field_names() {
    let c = played(3, 1);
    let json = c.export_json().expect("export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

    assert!(value.get("currentQuarter").is_some());
    let first = &value["history"][0];
    for key in [
        "quarter",
        "revenue",
        "grossMargin",
        "netProfit",
        "marketShare",
        "customerSatisfaction",
        "cashPosition",
        "employeeProductivity",
        "basePrice",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }

    let decision = &value["decisions"][0];
    for key in ["quarter", "marketing", "quality", "pricing", "efficiency"] {
        assert!(decision.get(key).is_some(), "missing {key}");
    }
}
