use std::path::Path;

use clap::ValueEnum;
use oki_engine::Engine;

use crate::dict_source::{build_dict, default_output_path, OkiToYamato, YamatoToOki};
use crate::settings::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Okinawan → Japanese (headwords are transcriptions)
    O2y,
    /// Japanese → Okinawan
    Y2o,
}

pub fn build_dict_cmd(
    engine: Engine,
    direction: Direction,
    input: &str,
    output: Option<&str>,
    skip_invalid: bool,
) {
    let input = Path::new(input);
    let output = output.map_or_else(|| default_output_path(input), |p| Path::new(p).to_path_buf());
    let s = settings();

    let stats = match direction {
        Direction::O2y => {
            let source = OkiToYamato::new(engine, s.o2y.clone(), s.index.script);
            die!(
                build_dict(&source, input, &output, skip_invalid),
                "Error: {}"
            )
        }
        Direction::Y2o => {
            let source = YamatoToOki::new(s.y2o.clone());
            die!(
                build_dict(&source, input, &output, skip_invalid),
                "Error: {}"
            )
        }
    };

    println!(
        "Wrote {} records to {} ({} skipped)",
        stats.written,
        output.display(),
        stats.skipped
    );
}
