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

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-slate-800 bg-[#020617] text-center text-slate-500">
            <div class="mb-4 font-bold text-white text-xl">"Convee.AI"</div>
            <p>"© 2026 Convee Automation. Made for Real Estate."</p>
        </footer>
    }
}
