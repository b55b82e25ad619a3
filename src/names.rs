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

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use amplify::hex::{FromHex, ToHex};
use amplify::Bytes32;

/// Maximal length of a contract name. On chain the name is prefixed with
/// `init_`, and the prefixed form must fit into 100 bytes.
pub const CONTRACT_NAME_MAX_LEN: usize = 95;

/// Maximal length of an entrypoint name.
pub const ENTRYPOINT_NAME_MAX_LEN: usize = 99;

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum NameError {
    /// contract name must not be empty.
    Empty,

    /// name '{0}' is longer than {1} bytes.
    TooLong(String, usize),

    /// name '{0}' contains character {1:?}, while only ASCII alphanumeric and
    /// punctuation characters are allowed.
    InvalidChar(String, char),

    /// contract name '{0}' must not contain a dot.
    ContainsDot(String),
}

fn check_chars(name: &str, max_len: usize) -> Result<(), NameError> {
    if name.len() > max_len {
        return Err(NameError::TooLong(name.to_owned(), max_len));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !c.is_ascii_punctuation())
    {
        return Err(NameError::InvalidChar(name.to_owned(), c));
    }
    Ok(())
}

/// Name of a smart contract inside a module, without the `init_` prefix.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct ContractName(String);

impl ContractName {
    /// Constructs a name from a string literal known to be valid.
    ///
    /// # Panics
    ///
    /// If the literal is not a valid contract name. Use [`FromStr`] for names
    /// coming from user input.
    pub fn from_static(name: &'static str) -> Self {
        ContractName::from_str(name)
            .unwrap_or_else(|err| panic!("invalid contract name literal: {err}"))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Name of the contract init function, as it is known on chain.
    pub fn init_name(&self) -> String { format!("init_{}", self.0) }
}

impl FromStr for ContractName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        check_chars(s, CONTRACT_NAME_MAX_LEN)?;
        if s.contains('.') {
            return Err(NameError::ContainsDot(s.to_owned()));
        }
        Ok(ContractName(s.to_owned()))
    }
}

impl AsRef<str> for ContractName {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Name of a receive function (entrypoint) of a smart contract.
///
/// Empty names are allowed: they denote the fallback entrypoint.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct EntrypointName(String);

impl EntrypointName {
    /// Constructs a name from a string literal known to be valid.
    ///
    /// # Panics
    ///
    /// If the literal is not a valid entrypoint name.
    pub fn from_static(name: &'static str) -> Self {
        EntrypointName::from_str(name)
            .unwrap_or_else(|err| panic!("invalid entrypoint name literal: {err}"))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn is_fallback(&self) -> bool { self.0.is_empty() }
}

impl FromStr for EntrypointName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_chars(s, ENTRYPOINT_NAME_MAX_LEN)?;
        Ok(EntrypointName(s.to_owned()))
    }
}

impl AsRef<str> for EntrypointName {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Constructs [`ContractName`] from a string literal.
#[macro_export]
macro_rules! cname {
    ($name:expr) => {
        $crate::ContractName::from_static($name)
    };
}

/// Constructs [`EntrypointName`] from a string literal.
#[macro_export]
macro_rules! ename {
    ($name:expr) => {
        $crate::EntrypointName::from_static($name)
    };
}

/// Reference to a deployed smart contract module: the hash of the module
/// source.
#[derive(Wrapper, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, From)]
#[wrapper(Deref, BorrowSlice, Hex, Index, RangeOps)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ModuleRef(
    #[from]
    #[from([u8; 32])]
    Bytes32,
);

impl ModuleRef {
    pub const fn from_array(id: [u8; 32]) -> Self { ModuleRef(Bytes32::from_array(id)) }
}

impl Display for ModuleRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl FromStr for ModuleRef {
    type Err = amplify::hex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_hex(s) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contract_names() {
        assert_eq!(cname!("cis2_multi_royalties").as_str(), "cis2_multi_royalties");
        assert_eq!(cname!("offchain-transfers").init_name(), "init_offchain-transfers");
        assert_eq!(ContractName::from_str(""), Err(NameError::Empty));
        assert_eq!(
            ContractName::from_str("my.contract"),
            Err(NameError::ContainsDot(s!("my.contract")))
        );
        assert_eq!(
            ContractName::from_str("my contract"),
            Err(NameError::InvalidChar(s!("my contract"), ' '))
        );
        let long = "a".repeat(CONTRACT_NAME_MAX_LEN + 1);
        assert_eq!(
            ContractName::from_str(&long),
            Err(NameError::TooLong(long.clone(), CONTRACT_NAME_MAX_LEN))
        );
        assert!(ContractName::from_str(&long[1..]).is_ok());
    }

    #[test]
    fn entrypoint_names() {
        assert_eq!(ename!("onReceivingCIS2").to_string(), "onReceivingCIS2");
        assert!(ename!("").is_fallback());
        assert!(EntrypointName::from_str("settled-balance-of").is_ok());
        assert!(EntrypointName::from_str("with.dot").is_ok());
        assert!(EntrypointName::from_str("naïve").is_err());
        assert!(EntrypointName::from_str(&"x".repeat(ENTRYPOINT_NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid contract name literal")]
    fn invalid_literal() { cname!("a.b"); }

    #[test]
    fn module_ref_hex() {
        let hex = "1d4538b8a9f690e56a5a07e827644695890e177ad1f58dba422d9e19de3ceebb";
        let module_ref = ModuleRef::from_str(hex).unwrap();
        assert_eq!(module_ref.to_string(), hex);
        assert_eq!(module_ref[0], 0x1d);
        assert_eq!(module_ref[31], 0xbb);
        assert!(ModuleRef::from_str("1d45").is_err());
        assert!(ModuleRef::from_str(&hex.replace('d', "z")).is_err());
    }
}
