// SPDX-License-Identifier: MPL-2.0
use album_lens::app::{self, Flags};

fn main() -> iced::Result {
    album_lens::logging::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        server: args.opt_value_from_str("--server").unwrap(),
        api_key: args.opt_value_from_str("--api-key").unwrap(),
        album_id: args.opt_value_from_str("--album").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
    };

    app::run(flags)
}
