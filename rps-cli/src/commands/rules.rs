use comfy_table::{presets::UTF8_FULL, Table};
use rps_core::{Choice, Outcome};

pub fn show_rules() {
    println!("RULES");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Pick", "Beats", "Loses to"]);

    for choice in Choice::ALL {
        let loses_to = Choice::ALL
            .into_iter()
            .find(|other| other.beats() == choice)
            .map(|other| other.to_string())
            .unwrap_or_default();

        table.add_row(vec![choice.to_string(), choice.beats().to_string(), loses_to]);
    }

    println!("{}", table);
    println!();
    println!(
        "Same picks are a tie. {} scores {:+}, {} scores {:+}.",
        Outcome::User.headline(),
        Outcome::User.score_delta(),
        Outcome::Computer.headline(),
        Outcome::Computer.score_delta()
    );
}
