//! Version skew of the language runtime that serialized a Family Tree's records.

use crate::template::{Template, Templated, templated_error};

/// The tree was written by a newer interpreter than the one now reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterDowngrade {
    db_version: String,
    current_version: String,
}

/// The tree was written by an older interpreter and its records must be upgraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterUpgradeRequired {
    db_version: String,
    current_version: String,
}

impl InterpreterDowngrade {
    pub fn new(
        db_version: impl std::fmt::Display,
        current_version: impl std::fmt::Display,
    ) -> Self {
        Self {
            db_version: db_version.to_string(),
            current_version: current_version.to_string(),
        }
    }

    pub fn db_version(&self) -> &str {
        &self.db_version
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }
}

impl InterpreterUpgradeRequired {
    pub fn new(
        db_version: impl std::fmt::Display,
        current_version: impl std::fmt::Display,
    ) -> Self {
        Self {
            db_version: db_version.to_string(),
            current_version: current_version.to_string(),
        }
    }

    pub fn db_version(&self) -> &str {
        &self.db_version
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }
}

impl Templated for InterpreterDowngrade {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The Family Tree you are trying to load was created with Python version ",
            "{db_python_version}. This version of Gramps uses Python version ",
            "{current_python_version}.  So you are trying to load data created in a newer ",
            "format into an older program, and this is bound to fail.\n\n",
            "You should start your <b>newer</b> version of Gramps and <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=How_to_make_a_backup",
            "\">make a backup</a> of your Family Tree. You can then import this backup into ",
            "this version of Gramps."
        ),
        &["db_python_version", "current_python_version"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("db_python_version", self.db_version.clone()),
            ("current_python_version", self.current_version.clone()),
        ]
    }
}

impl Templated for InterpreterUpgradeRequired {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The Family Tree you are trying to load is in the Python version ",
            "{db_python_version} format. This version of Gramps uses Python version ",
            "{current_python_version}. Therefore you cannot load this Family Tree without ",
            "upgrading the Python version of the Family Tree.\n\n",
            "If you upgrade then you won't be able to use the previous version of Gramps, ",
            "even if you subsequently <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=Gramps_4.0_Wiki_Manual_-_Manage_Family_Trees#Backing_up_a_Family_Tree",
            "\">backup</a> or <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=Gramps_4.0_Wiki_Manual_-_Manage_Family_Trees#Export_into_Gramps_formats",
            "\">export</a> your upgraded Family Tree.\n\n",
            "Upgrading is a difficult task which could irretrievably corrupt your Family ",
            "Tree if it is interrupted or fails.\n\n",
            "If you have not already made a backup of your Family Tree, then you should ",
            "start your <b>old</b> version of Gramps and <a href=\"",
            "http://www.gramps-project.org/wiki/index.php?title=How_to_make_a_backup",
            "\">make a backup</a> of your Family Tree."
        ),
        &["db_python_version", "current_python_version"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("db_python_version", self.db_version.clone()),
            ("current_python_version", self.current_version.clone()),
        ]
    }
}

templated_error!(InterpreterDowngrade, InterpreterUpgradeRequired);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downgrade_names_both_interpreters() {
        let text = InterpreterDowngrade::new(3, 2).to_string();
        assert!(text.contains("created with Python version 3."));
        assert!(text.contains("uses Python version 2."));
    }

    #[test]
    fn upgrade_links_backup_and_export() {
        let text = InterpreterUpgradeRequired::new("2.7", "3.11").to_string();
        assert!(text.contains("Python version 2.7 format"));
        assert!(text.contains("Python version 3.11."));
        assert!(text.contains(crate::template::EXPORT_MANUAL_URL));
        assert!(text.contains(crate::template::BACKUP_HOWTO_URL));
    }
}
