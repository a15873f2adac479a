use daytrader_fixtures::args::{GeneratorArgs, OutputFormat, RecordArgs};
use daytrader_fixtures::entities::Tz;
use daytrader_fixtures::output::render;
use daytrader_fixtures::random_account_profile;

#[test]
fn test_generator_args_creation() {
    let args = GeneratorArgs {
        count: 25,
        seed: Some(42),
        config: None,
    };

    assert_eq!(args.count, 25);
    assert_eq!(args.seed, Some(42));
    assert_eq!(args.load_config().unwrap().max_users, 200);
}

#[test]
fn test_record_args_creation() {
    let args = RecordArgs {
        format: OutputFormat::Html,
        zone: Tz::Europe__London,
    };

    assert_eq!(args.format, OutputFormat::Html);
    assert_eq!(args.zone, Tz::Europe__London);
}

#[test]
fn test_seeded_profiles_render_identically() {
    let args = GeneratorArgs {
        count: 1,
        seed: Some(1234),
        config: None,
    };

    let mut a = args.build_generator().unwrap();
    let mut b = args.build_generator().unwrap();

    for _ in 0..5 {
        let left = render(&random_account_profile(&mut a), OutputFormat::Text, Tz::UTC).unwrap();
        let right = render(&random_account_profile(&mut b), OutputFormat::Text, Tz::UTC).unwrap();
        assert_eq!(left, right);
    }
}
