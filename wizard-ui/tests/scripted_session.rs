use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use wizard_core::{Locale, MemorySink, SlabOption};
use wizard_ui::{App, AppError, Outcome, WizardConfig};

fn run(
    app: &mut App<MemorySink>,
    script: &str,
) -> Vec<Result<Outcome, AppError>> {
    script
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| app.handle_line(line))
        .collect()
}

#[test]
fn scripted_double_slab_project_is_submitted() {
    let mut app = App::new(Locale::Fr, MemorySink::new());

    let results = run(
        &mut app,
        "
        new
        set title Tour A
        set region ile-de-france
        set department 92
        set floor -1
        next
        set height 210
        set width 90,5
        set wallType type2
        next
        slab double
        set room1Width 80
        set room2Width 120
        set slabEqualsWallThickness oui
        finish
        ",
    );

    assert!(results.iter().all(Result::is_ok), "{results:?}");
    assert!(app.session().is_none());
    assert_eq!(app.projects(), ["Tour A".to_string()]);

    let project = &app.sink().projects()[0];
    assert_eq!(project.title, "Tour A");
    assert_eq!(project.floor, Some(-1));
    assert_eq!(project.width, Some(dec!(90.5)));
    assert_eq!(project.slab_option, SlabOption::Double);
    assert_eq!(project.room2_width, Some(dec!(120)));
    assert!(project.slab_equals_wall_thickness);
}

#[test]
fn errors_do_not_end_the_script() {
    let mut app = App::new(Locale::En, MemorySink::new());

    let results = run(
        &mut app,
        "
        new
        set floorsAbove -3
        set colour red
        dance
        set floorsAbove 3
        ",
    );

    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_err());
    assert!(matches!(results[3], Err(AppError::Command(_))));
    assert!(results[4].is_ok());
    assert_eq!(
        app.session().unwrap().form().unwrap().floors_above,
        Some(3)
    );
}

#[test]
fn cancel_discards_the_draft() {
    let mut app = App::new(Locale::En, MemorySink::new());

    run(&mut app, "new\nset title Draft\nnext\ncancel");

    assert!(app.session().is_none());
    assert!(app.sink().is_empty());
    assert!(app.screen().contains("No projects yet"));
}

#[test]
fn fixture_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wizard.toml");

    let config = WizardConfig::load(&path).unwrap();

    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.log_level, "debug,wizard_core=trace");
    assert_eq!(config.log_file, None);
}
