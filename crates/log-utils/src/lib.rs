/*
 * Copyright 2024 Fluence DAO
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &[&str] = &[
    "info",
    "contracts=info",
    "contract_harness=debug",
    "counter_contracts=info",
    "modular_counter=info",
];

/// Default directives first, then `rust_log`. A later directive for the same
/// target replaces the earlier one, so `RUST_LOG` wins over the defaults.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    let mut filter = EnvFilter::builder().parse_lossy(DEFAULT_DIRECTIVES.join(","));

    let overrides = rust_log
        .into_iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .filter_map(|d| match d.parse::<Directive>() {
            Ok(directive) => Some(directive),
            Err(e) => {
                eprintln!("ignoring invalid {} directive {d}: {e}", EnvFilter::DEFAULT_ENV);
                None
            }
        });
    for directive in overrides {
        filter = filter.add_directive(directive);
    }

    filter
}

/// Installs a global `fmt` subscriber that also receives `log` records.
/// Does nothing if a subscriber is already installed.
pub fn enable_logs() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_test_writer()
        .try_init()
        .ok();
}
