use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{RadixError, Result};
use crate::types::{CaseSensitivity, Radix, RadixMeta};

static REGISTRY: OnceLock<Registry> = OnceLock::new();

macro_rules! register_aliases {
    ($($base:literal => [$($alias:literal),* $(,)?]),* $(,)?) => {
        fn aliases_for(base: u32) -> &'static [&'static str] {
            match base {
                $($base => &[$($alias),*],)*
                _ => &[],
            }
        }
    };
}

register_aliases! {
    2 => ["bin", "binary"],
    8 => ["oct", "octal"],
    10 => ["dec", "decimal"],
    16 => ["hex", "hexadecimal"],
    36 => ["b36"],
}

/// Resolves base names such as `16`, `base16` or `hex` to a [`Radix`].
pub struct Registry {
    radixes: Vec<Radix>,
    name_map: HashMap<String, usize>,
}

impl Registry {
    fn new() -> Self {
        let radixes: Vec<Radix> = Radix::all().collect();

        let mut name_map = HashMap::new();
        for (idx, radix) in radixes.iter().enumerate() {
            name_map.insert(radix.get().to_string(), idx);
            name_map.insert(format!("base{}", radix), idx);
            for alias in aliases_for(radix.get()) {
                name_map.insert(alias.to_string(), idx);
            }
        }

        Registry { radixes, name_map }
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn get(&self, name: &str) -> Result<Radix> {
        let name_lower = name.trim().to_lowercase();
        if let Some(&idx) = self.name_map.get(&name_lower) {
            return Ok(self.radixes[idx]);
        }
        // Numbers that parse but fall outside 2..=36 get the range error.
        match name_lower.parse::<u32>() {
            Ok(base) => Radix::new(base),
            Err(_) => Err(RadixError::unknown_base(name)),
        }
    }

    pub fn meta(&self, radix: Radix) -> RadixMeta {
        let (chunk_digits, _) = radix.chunk();
        RadixMeta {
            base: radix,
            name: format!("base{}", radix),
            aliases: aliases_for(radix.get()).to_vec(),
            alphabet: radix.alphabet(),
            case_sensitivity: CaseSensitivity::Insensitive,
            chunk_digits,
        }
    }

    pub fn list(&self) -> Vec<RadixMeta> {
        self.radixes.iter().map(|&r| self.meta(r)).collect()
    }
}
