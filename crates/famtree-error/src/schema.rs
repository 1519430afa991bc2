//! Schema version skew between a Family Tree and the running application.

use crate::template::{Template, Templated, templated_error};

/// The tree's schema version lies outside the range this build can read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionError {
    tree_version: u32,
    min_version: u32,
    max_version: u32,
}

impl VersionError {
    pub fn new(tree_version: u32, min_version: u32, max_version: u32) -> Self {
        Self {
            tree_version,
            min_version,
            max_version,
        }
    }

    pub fn tree_version(&self) -> u32 {
        self.tree_version
    }

    pub fn min_version(&self) -> u32 {
        self.min_version
    }

    pub fn max_version(&self) -> u32 {
        self.max_version
    }
}

impl Templated for VersionError {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The schema version is not supported by this version of Gramps.\n\n",
            "This Family Tree is schema version {tree_vers}, and this version of Gramps ",
            "supports versions {min_vers} to {max_vers}\n\n",
            "Please upgrade to the corresponding version or use XML for porting data ",
            "between different schema versions."
        ),
        &["tree_vers", "min_vers", "max_vers"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("tree_vers", self.tree_version.to_string()),
            ("min_vers", self.min_version.to_string()),
            ("max_vers", self.max_version.to_string()),
        ]
    }
}

/// The tree uses an older schema and must be upgraded before it can be opened.
///
/// Upgrading cannot be undone, which the rendered text warns about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaUpgradeRequired {
    old_schema: u32,
    new_schema: u32,
}

impl SchemaUpgradeRequired {
    pub fn new(old_schema: u32, new_schema: u32) -> Self {
        Self {
            old_schema,
            new_schema,
        }
    }

    pub fn old_schema(&self) -> u32 {
        self.old_schema
    }

    pub fn new_schema(&self) -> u32 {
        self.new_schema
    }
}

impl Templated for SchemaUpgradeRequired {
    const TEMPLATE: Template = Template::new(
        concat!(
            "The Family Tree you are trying to load is in the schema version {oldschema} ",
            "format. This version of Gramps uses schema version {newschema}. Therefore you ",
            "cannot load this Family Tree without upgrading the schema version of the ",
            "Family Tree.\n\n",
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
        &["oldschema", "newschema"],
    );

    fn args(&self) -> Vec<(&'static str, String)> {
        vec![
            ("oldschema", self.old_schema.to_string()),
            ("newschema", self.new_schema.to_string()),
        ]
    }
}

templated_error!(VersionError, SchemaUpgradeRequired);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_error_mentions_all_versions() {
        let text = VersionError::new(5, 1, 3).to_string();
        assert!(text.contains("schema version 5,"));
        assert!(text.contains("supports versions 1 to 3"));
    }

    #[test]
    fn schema_upgrade_warns_about_irreversibility() {
        let text = SchemaUpgradeRequired::new(17, 18).to_string();
        assert!(text.contains("schema version 17 format"));
        assert!(text.contains("uses schema version 18."));
        assert!(text.contains("won't be able to use the previous version"));
        assert!(text.contains("<b>old</b>"));
    }
}
