// Concordium smart contract bindings
//
// SPDX-License-Identifier: Apache-2.0
//
// Copyright (C) 2024-2025 Concordium bindings contributors.
// All rights under the above copyrights are reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use std::fs;
use std::io::stdout;
use std::path::PathBuf;

use ccd::{contracts, ContractBindings, SchemaKind};
use ccd_ui::ContractUi;
use serde_json::{Map, Value};

use crate::cmd::{Args, Cmd, Format};
use crate::dump::{dump_contract, entrypoints, write_structured, ContractSummary, SchemaDump};

fn find(contract: &str) -> anyhow::Result<&'static ContractBindings> {
    contracts::find(contract).ok_or_else(|| {
        anyhow!(
            "Unknown contract '{contract}'; known contracts are: {}",
            contracts::all()
                .map(|bindings| bindings.contract_name().to_string())
                .join(", ")
        )
    })
}

fn find_ui(contract: &str) -> Option<&'static ContractUi> {
    let ui = ccd_ui::offchain_transfers_ui();
    (ui.bindings.contract_name().as_str() == contract).then_some(ui)
}

impl Args {
    pub fn exec(&self) -> anyhow::Result<()> {
        match &self.command {
            Cmd::List => {
                let summaries = contracts::all().map(|bindings| {
                    let ui = find_ui(bindings.contract_name().as_str()).is_some();
                    ContractSummary::with(bindings, ui)
                });
                match self.format {
                    Format::Text => {
                        for summary in summaries {
                            println!(
                                "{:<24}\t{}\t{} entrypoints{}{}",
                                summary.contract_name,
                                summary
                                    .module_ref
                                    .map(|module_ref| module_ref.to_string())
                                    .unwrap_or_else(|| s!("-")),
                                summary.entrypoints,
                                if summary.events { ", events" } else { "" },
                                if summary.ui { ", ui" } else { "" },
                            );
                        }
                    }
                    format => write_structured(stdout(), format, &summaries)?,
                }
            }

            Cmd::Entrypoints { contract } => {
                let bindings = find(contract)?;
                let summaries = entrypoints(bindings);
                match self.format {
                    Format::Text => {
                        for summary in summaries {
                            let schemas = summary
                                .schemas
                                .iter()
                                .map(SchemaKind::to_string)
                                .collect::<Vec<_>>();
                            println!(
                                "{:<24}\t{:<24}\t{:<26}\t{}",
                                summary.key,
                                summary.entrypoint,
                                format!("\"{}\"", summary.display_name),
                                schemas.join(", ")
                            );
                        }
                    }
                    format => write_structured(stdout(), format, &summaries)?,
                }
            }

            Cmd::Schema {
                contract,
                entrypoint,
                kind,
                raw,
            } => {
                let bindings = find(contract)?;
                let (name, blob) = match entrypoint {
                    None if *kind == SchemaKind::Request => {
                        (bindings.init().init_name(), bindings.init().request_schema.as_ref())
                    }
                    None => return Err(anyhow!("Init function has only a request schema")),
                    Some(entrypoint) => {
                        let (_, method) = bindings.resolve(entrypoint).ok_or_else(|| {
                            anyhow!("Contract '{contract}' has no entrypoint '{entrypoint}'")
                        })?;
                        (method.receive_name(), method.schema(*kind))
                    }
                };
                let blob = blob.ok_or_else(|| anyhow!("{name} has no {kind} schema"))?;
                match (self.format, *raw) {
                    (_, true) => println!("{blob}"),
                    (Format::Text, false) => println!("{}", blob.parse()?),
                    (format, false) => {
                        write_structured(stdout(), format, &SchemaDump::parse(blob)?)?
                    }
                }
            }

            Cmd::Events { contract } => {
                let bindings = find(contract)?;
                let blob = bindings
                    .event_schema()
                    .ok_or_else(|| anyhow!("Contract '{contract}' does not log typed events"))?;
                match self.format {
                    Format::Text => {
                        let ty = blob.parse()?;
                        for name in ty.variant_names() {
                            if let Some(fields) = ty.variant(name) {
                                let fields = fields.names().join(", ");
                                println!("{name} {{ {fields} }}");
                            }
                        }
                    }
                    format => write_structured(stdout(), format, &SchemaDump::parse(blob)?)?,
                }
            }

            Cmd::Ui { contract } => {
                find(contract)?;
                let ui = find_ui(contract)
                    .ok_or_else(|| anyhow!("Contract '{contract}' has no user interface"))?;
                let schemas = ui
                    .json_schemas()
                    .into_iter()
                    .map(|(name, schema)| (name, schema.as_json().clone()))
                    .collect::<Map<String, Value>>();
                let format = match self.format {
                    Format::Text => Format::Json,
                    format => format,
                };
                write_structured(stdout(), format, &schemas)?;
            }

            Cmd::Dump {
                force,
                contract,
                dst,
            } => {
                let bindings = find(contract)?;
                let dst = dst
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(bindings.contract_name().as_str()));
                if *force {
                    fs::remove_dir_all(&dst).or_else(|e| {
                        if e.kind() == std::io::ErrorKind::NotFound {
                            Ok(())
                        } else {
                            Err(e)
                        }
                    })?;
                }
                info!(
                    contract = %bindings.contract_name(),
                    dst = %dst.display(),
                    "dumping schemas"
                );
                dump_contract(bindings, find_ui(contract), &dst)?;
            }
        }
        Ok(())
    }
}
