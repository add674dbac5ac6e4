/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use convee_analytics::{LoggerConfig, SiteLogger};
        use convee_website::app::*;
        use convee_website::config::load_site_config;
        use leptos::*;

        fn main() {
            console_error_panic_hook::set_once();

            let (config, problems) = load_site_config();
            let mut logger = LoggerConfig::default();
            if let Some((base, site)) = config.matomo() {
                logger = logger.with_matomo(base, site);
            }
            if let Err(e) = SiteLogger::init(logger) {
                web_sys::console::error_1(&format!("couldn't initialize logging: {e}").into());
            }
            for problem in problems {
                log::error!("Site configuration: {problem}");
            }
            convee_analytics::track_page_view("Convee", "/");

            mount_to_body(move || view! { <App config/> })
        }
    } else {
        fn main() {
            eprintln!("convee_website renders in the browser; build it for wasm32 with `trunk serve`.");
        }
    }
}
