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

use crate::pages::Home::*;
use crate::services::{provide_lead_services, LeadServices};
use crate::storage::SiteStore;
use convee_core::SiteConfig;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DESCRIPTION: &str = "Convee beantwortet Immobilienanfragen in Sekunden, qualifiziert Interessenten vor, pflegt Ihr CRM und bucht Besichtigungstermine. Rund um die Uhr.";

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let formatter = |text| format!("{text} - Convee");
    provide_meta_context();
    provide_lead_services(LeadServices::new(config, SiteStore::detect()));

    view! {
        <Html lang="de"/>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta
            name="keywords"
            content="Immobilienmakler, Lead-Automatisierung, KI-Assistent, CRM, OnOffice, FlowFact, Terminbuchung"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Convee"/>
        <Meta property="og:locale" content="de_DE"/>
        <Meta property="og:title" content="Convee - Ihr neuer Mitarbeiter arbeitet 24/7"/>
        <Meta property="og:description" content=DESCRIPTION/>

        <Router>
            <Routes>
                <Route path="" view=Home/>
            </Routes>
        </Router>
    }
}
