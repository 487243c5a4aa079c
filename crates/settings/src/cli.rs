use webcolors::{Representation, Specification};

use crate::Settings;

#[derive(clap::Parser, Debug)]
#[command(name = "colorconv", version, about = "Converts between web color formats", long_about = None)]
pub struct Arguments {
    /// Color to convert: a name, #rgb, #rrggbb, rgb(r, g, b) or rgb(r%, g%, b%)
    #[arg(required_unless_present = "list")]
    value: Option<String>,

    /// Specification to look color names up in
    #[arg(long, value_parser = parse_specification, value_name = "html4|css2|css21|css3")]
    spec: Option<Specification>,

    /// Representation to convert into
    #[arg(long, value_parser = parse_representation, value_name = "name|hex|rgb|percent")]
    to: Option<Representation>,

    /// List all color names of the specification
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    list: bool,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        settings.list = self.list;
        settings.value = self.value;

        if let Some(spec) = self.spec {
            settings.specification = spec;
        }

        if let Some(target) = self.to {
            settings.target = target;
        }
    }
}

fn parse_specification(s: &str) -> Result<Specification, String> {
    s.parse().map_err(|e: webcolors::ColorError| format!("{e}"))
}

fn parse_representation(s: &str) -> Result<Representation, String> {
    match s {
        "name" => Ok(Representation::Name),
        "hex" => Ok(Representation::Hex),
        "rgb" => Ok(Representation::Rgb),
        "percent" => Ok(Representation::RgbPercent),
        _ => Err(format!("unknown representation {s:?}")),
    }
}
