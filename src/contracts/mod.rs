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

//! Bindings of the contracts known to the library.

pub mod cis2_multi_royalties;
pub mod offchain_transfers;

pub use cis2_multi_royalties::cis2_multi_royalties;
pub use offchain_transfers::offchain_transfers;

use crate::ContractBindings;

/// Bindings of all known contracts.
pub fn all() -> [&'static ContractBindings; 2] { [cis2_multi_royalties(), offchain_transfers()] }

/// Finds bindings of a contract by its name.
pub fn find(contract_name: &str) -> Option<&'static ContractBindings> {
    all()
        .into_iter()
        .find(|bindings| bindings.contract_name().as_str() == contract_name)
}
