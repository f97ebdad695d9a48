//! Generate an analysis report for a sample drawing session

fn main() {
    let json = r#"{
        "phases": [
            { "phase": 1, "timeSpent": 120000, "strokeCount": 10, "colorsUsed": ["red", "blue"], "coverage": 20 },
            { "phase": 2, "timeSpent": 240000, "strokeCount": 30, "colorsUsed": ["green", "brown", "green"], "coverage": 40 },
            { "phase": 3, "timeSpent": 360000, "strokeCount": 60, "colorsUsed": ["red", "yellow", "blue", "black"], "coverage": 60 }
        ]
    }"#;

    match htp_analyzer::analyze_drawing(json.to_string()) {
        Ok(report) => print!("{report}"),
        Err(e) => eprintln!("Error: {e:?}"),
    }
}
