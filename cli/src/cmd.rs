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

use std::path::PathBuf;

use ccd::SchemaKind;
use clap::{ArgAction, ValueHint};

#[derive(Parser)]
#[clap(
    name = "ccdx",
    bin_name = "ccdx",
    author,
    version,
    about = "Inspector of Concordium smart contract bindings"
)]
pub struct Args {
    /// Output format
    #[clap(short, long, global = true, default_value = "text", env = "CCDX_FORMAT")]
    pub format: Format,

    /// Increase log verbosity; may be repeated
    ///
    /// Ignored if `RUST_LOG` environment variable is set.
    #[clap(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Cmd,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum Format {
    /// Human-readable text
    #[default]
    Text,
    Yaml,
    Json,
}

#[derive(Parser, Clone, Debug)]
pub enum Cmd {
    /// List contracts known to the bindings
    List,

    /// List entrypoints of a contract together with the schemas they have
    Entrypoints {
        /// Contract name
        contract: String,
    },

    /// Print the type described by a schema of a contract function
    Schema {
        /// Contract name
        contract: String,

        /// Entrypoint key or on-chain entrypoint name
        ///
        /// If skipped, the schema of the contract init function is printed.
        entrypoint: Option<String>,

        /// Which schema of the entrypoint to print
        #[clap(short, long, default_value = "request")]
        kind: SchemaKind,

        /// Print the base64 schema blob instead of the type it describes
        #[clap(long)]
        raw: bool,
    },

    /// Print the type of the events logged by a contract
    Events {
        /// Contract name
        contract: String,
    },

    /// Print JSON schemas of the user interface of a contract
    Ui {
        /// Contract name
        contract: String,
    },

    /// Dump all schemas of a contract into a directory, one YAML file per
    /// schema
    Dump {
        /// Remove the destination directory if it already exists
        #[clap(short = 'F', long)]
        force: bool,

        /// Contract name
        contract: String,

        /// Destination directory to put dump files
        ///
        /// If skipped, a directory named after the contract is created in the
        /// current directory.
        #[clap(value_hint = ValueHint::DirPath)]
        dst: Option<PathBuf>,
    },
}
