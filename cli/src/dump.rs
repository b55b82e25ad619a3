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

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use ccd::{ContractBindings, ModuleRef, SchemaBlob, SchemaKind, SchemaType};
use ccd_ui::ContractUi;
use serde::Serialize;

use crate::cmd::Format;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub contract_name: String,
    pub module_ref: Option<ModuleRef>,
    pub entrypoints: usize,
    pub events: bool,
    pub ui: bool,
}

impl ContractSummary {
    pub fn with(bindings: &ContractBindings, ui: bool) -> Self {
        ContractSummary {
            contract_name: bindings.contract_name().to_string(),
            module_ref: bindings.module_ref(),
            entrypoints: bindings.entrypoints().len(),
            events: bindings.event_schema().is_some(),
            ui,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrypointSummary {
    pub key: &'static str,
    pub entrypoint: String,
    pub display_name: &'static str,
    pub schemas: Vec<SchemaKind>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDump {
    pub base64: SchemaBlob,
    #[serde(rename = "type")]
    pub ty: SchemaType,
}

impl SchemaDump {
    pub fn parse(blob: &SchemaBlob) -> anyhow::Result<Self> {
        Ok(SchemaDump {
            base64: blob.clone(),
            ty: blob.parse()?,
        })
    }
}

pub fn entrypoints(bindings: &ContractBindings) -> Vec<EntrypointSummary> {
    bindings
        .methods()
        .map(|(key, method)| EntrypointSummary {
            key,
            entrypoint: method.entrypoint.to_string(),
            display_name: bindings.display_name(key).unwrap_or_default(),
            schemas: [SchemaKind::Request, SchemaKind::Response, SchemaKind::Error]
                .into_iter()
                .filter(|kind| method.schema(*kind).is_some())
                .collect(),
        })
        .collect()
}

/// Writes serializable data in the requested structured format.
///
/// Text format is handled by the callers; here it falls back to YAML.
pub fn write_structured(
    mut out: impl Write,
    format: Format,
    data: &impl Serialize,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, data)?;
            writeln!(out)?;
        }
        Format::Text | Format::Yaml => serde_yaml::to_writer(out, data)?,
    }
    Ok(())
}

pub fn dump_contract(
    bindings: &ContractBindings,
    ui: Option<&ContractUi>,
    dst: &Path,
) -> anyhow::Result<()> {
    fs::create_dir_all(dst)?;

    print!("Processing init function ... ");
    match &bindings.init().request_schema {
        Some(blob) => {
            let out = File::create_new(dst.join("init.request.yaml"))?;
            serde_yaml::to_writer(&out, &SchemaDump::parse(blob)?)?;
            println!("success");
        }
        None => println!("no schema"),
    }

    print!("Processing entrypoints ... none found");
    let mut count = 0usize;
    for (no, (key, method)) in bindings.methods().enumerate() {
        for kind in [SchemaKind::Request, SchemaKind::Response, SchemaKind::Error] {
            let Some(blob) = method.schema(kind) else {
                continue;
            };
            let out = File::create_new(dst.join(format!("{:02}-{key}.{kind}.yaml", no + 1)))?;
            serde_yaml::to_writer(&out, &SchemaDump::parse(blob)?)?;
            count += 1;
        }
        print!("\rProcessing entrypoints ... {} processed, {count} schemas", no + 1);
    }
    println!();

    print!("Processing events ... ");
    match bindings.event_schema() {
        Some(blob) => {
            let out = File::create_new(dst.join("events.yaml"))?;
            serde_yaml::to_writer(&out, &SchemaDump::parse(blob)?)?;
            println!("success");
        }
        None => println!("no schema"),
    }

    if let Some(ui) = ui {
        print!("Processing user interface ... ");
        let schemas = ui.json_schemas();
        for (name, schema) in &schemas {
            let out = File::create_new(dst.join(format!("ui.{name}.json")))?;
            serde_json::to_writer_pretty(&out, schema.as_json())?;
        }
        println!("{} JSON schemas", schemas.len());
    }

    Ok(())
}
