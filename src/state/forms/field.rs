//! Form field value objects

use std::fmt;

/// One named input slot of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Dob,
    Address,
    Branch,
}

impl Field {
    /// All fields in display and focus order
    pub const ALL: [Field; 4] = [
        Field::FullName,
        Field::Dob,
        Field::Address,
        Field::Branch,
    ];

    /// Stable key used in logs and error listings
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Dob => "dob",
            Self::Address => "address",
            Self::Branch => "branch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Dob => "Date of Birth",
            Self::Address => "Address",
            Self::Branch => "Branch",
        }
    }

    /// Short name used in "... is required" messages
    pub fn required_label(&self) -> &'static str {
        match self {
            Self::FullName => "Name",
            Self::Dob => "DOB",
            Self::Address => "Address",
            Self::Branch => "Branch",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Address)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Dob => 1,
            Self::Address => 2,
            Self::Branch => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Academic department a student registers for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Cs,
    It,
    Etc,
    Mechanical,
}

impl Branch {
    pub const ALL: [Branch; 4] = [Branch::Cs, Branch::It, Branch::Etc, Branch::Mechanical];

    /// Code stored in the form data
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cs => "CS",
            Self::It => "IT",
            Self::Etc => "E&TC",
            Self::Mechanical => "Mechanical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cs => "Computer Science",
            Self::It => "Information Technology",
            Self::Etc => "Electronics & Telecommunication",
            Self::Mechanical => "Mechanical Engineering",
        }
    }

    /// Look up a branch by its exact code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.code() == code)
    }

    /// Cycle through "unselected" and every branch code.
    ///
    /// An empty or unknown code counts as unselected.
    pub fn cycle_code(current: &str, forward: bool) -> &'static str {
        let slots = Self::ALL.len() + 1;
        let position = Self::from_code(current)
            .and_then(|b| Self::ALL.iter().position(|x| *x == b))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };
        match next {
            0 => "",
            n => Self::ALL[n - 1].code(),
        }
    }
}

/// Raw text values of the four registration fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub full_name: String,
    pub dob: String,
    pub address: String,
    pub branch: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Dob => &self.dob,
            Field::Address => &self.address,
            Field::Branch => &self.branch,
        }
    }

    /// Replace the value of exactly one field
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Dob => self.dob = value,
            Field::Address => self.address = value,
            Field::Branch => self.branch = value,
        }
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
