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

use crate::components::sections::Comparison::*;
use crate::components::sections::Features::*;
use crate::components::sections::RoiCalculator::*;
use crate::components::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Ihr 24/7 Lead-Assistent für Immobilienmakler"/>
        <Page>
            <HeroHeader/>
            <Pipeline/>
            <ComparisonSection/>
            <FeatureGrid/>
            <RoiCalculator/>
        </Page>
    }
}
