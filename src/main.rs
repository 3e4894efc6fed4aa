//! `qli2svg` 바이너리 진입점.

use qli2svg::domain::params::SvgOutputParams;
use qli2svg::interface::cli::{Cli, CliAction};
use qli2svg::interface::composition::AppComposition;

fn main() {
    // stdout은 SVG 출력용이므로 로그는 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = Cli::parse_action();
    let composition = AppComposition::new(invocation.quiet);

    let result = match invocation.action {
        CliAction::Convert(options) => composition.convert_usecase().execute(options).map(|_| ()),
        CliAction::Extents(options) => composition
            .extents_usecase()
            .execute_pretty_json(options)
            .map(|json| println!("{json}")),
        CliAction::DescribeParams => {
            print!("{}", SvgOutputParams::describe());
            Ok(())
        }
        CliAction::InspectConfig => composition
            .inspect_config_usecase()
            .execute()
            .map(|json| println!("{json}")),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
