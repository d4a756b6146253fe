// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("art_space=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        });

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "unrecognized arguments");
    }

    app::run(Flags { lang, config_dir })
}
