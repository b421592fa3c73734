// `cluster-agent components`: supported components, the files each one
// accepts and the first existing candidate config directory.

use prettytable::{Table, format, row};

use cluster_agent::components;
use cluster_agent::libs::file_locator::ConfigLocator;
use cluster_agent::{Component, log_debug};
use colored::Colorize;

use crate::commands::CommandContext;

pub fn run(ctx: &CommandContext) -> i32 {
    let locator = ConfigLocator::new(&ctx.config);
    log_debug!("[Components] OS family: {:?}", locator.os_family());

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row![b->"Component", b->"Home variable", b->"Files", b->"Config dir"]);

    for component in Component::ALL {
        let profile = components::profile(component);
        let files = profile.files.iter().map(|f| f.name).collect::<Vec<_>>().join("\n");
        let dir = locator
            .discovered_dir(component)
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![component, profile.home_env, files, dir]);
    }

    table.printstd();
    0
}
