use crate::view::app::Routes;

#[derive(Clone, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub target: Option<Routes>,
    pub children: Option<&'static [MenuItem]>,
}

static SERVICES: [MenuItem; 3] = [
    MenuItem {
        label: "Industrial Welding",
        target: Some(Routes::IndustrialPage),
        children: None,
    },
    MenuItem {
        label: "Commercial Welding",
        target: Some(Routes::CommercialPage),
        children: None,
    },
    MenuItem {
        label: "Residential Welding",
        target: Some(Routes::ResidentialPage),
        children: None,
    },
];

pub static MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        label: "Home",
        target: Some(Routes::HomePage),
        children: None,
    },
    MenuItem {
        label: "About Us",
        target: Some(Routes::AboutPage),
        children: None,
    },
    MenuItem {
        label: "Services",
        target: None,
        children: Some(&SERVICES),
    },
    MenuItem {
        label: "Projects",
        target: Some(Routes::ProjectsPage),
        children: None,
    },
    MenuItem {
        label: "Blog",
        target: Some(Routes::BlogPage),
        children: None,
    },
    MenuItem {
        label: "FAQs",
        target: Some(Routes::FaqsPage),
        children: None,
    },
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("menu item has an empty label")]
    EmptyLabel,
    #[error("menu item \"{0}\" has neither a target nor children")]
    MissingTarget(&'static str),
    #[error("menu item \"{0}\" has both a target and children")]
    TargetAndChildren(&'static str),
}

// An item is either a leaf with a target or a branch with children. A branch
// with an empty child list is allowed and renders an empty panel.
pub fn validate(items: &[MenuItem]) -> Result<(), ConfigError> {
    for item in items {
        if item.label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        match (item.target.as_ref(), item.children) {
            (Some(_), Some(_)) => return Err(ConfigError::TargetAndChildren(item.label)),
            (None, None) => return Err(ConfigError::MissingTarget(item.label)),
            (None, Some(children)) => validate(children)?,
            (Some(_), None) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate, ConfigError, MenuItem, MENU_ITEMS};
    use crate::view::app::Routes;
    use test_case::test_case;

    #[test]
    fn fixed_menu_is_valid() {
        assert_eq!(validate(&MENU_ITEMS), Ok(()));
    }

    #[test]
    fn top_level_entries_in_order() {
        let labels = MENU_ITEMS.iter().map(|item| item.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Home", "About Us", "Services", "Projects", "Blog", "FAQs"]
        );
    }

    #[test]
    fn every_node_is_leaf_xor_branch() {
        fn check(items: &[MenuItem]) {
            for item in items {
                assert_ne!(
                    item.target.is_some(),
                    item.children.is_some(),
                    "node \"{}\" must have exactly one of target and children",
                    item.label,
                );
                if let Some(children) = item.children {
                    check(children);
                }
            }
        }

        check(&MENU_ITEMS);
    }

    #[test]
    fn services_branch_has_the_three_welding_children() {
        let services = MENU_ITEMS
            .iter()
            .find(|item| item.label == "Services")
            .unwrap();
        let children = services.children.unwrap();

        let labels = children.iter().map(|child| child.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Industrial Welding", "Commercial Welding", "Residential Welding"]
        );
        assert!(children.iter().all(|child| child.target.is_some()));
    }

    #[test_case(
        MenuItem { label: "", target: Some(Routes::HomePage), children: None }
        => Err(ConfigError::EmptyLabel);
        "empty label"
    )]
    #[test_case(
        MenuItem { label: "Dangling", target: None, children: None }
        => Err(ConfigError::MissingTarget("Dangling"));
        "neither target nor children"
    )]
    #[test_case(
        MenuItem { label: "Greedy", target: Some(Routes::HomePage), children: Some(&[]) }
        => Err(ConfigError::TargetAndChildren("Greedy"));
        "both target and children"
    )]
    #[test_case(
        MenuItem { label: "Empty", target: None, children: Some(&[]) }
        => Ok(());
        "branch with no children is allowed"
    )]
    fn validate_node(item: MenuItem) -> Result<(), ConfigError> {
        validate(std::slice::from_ref(&item))
    }

    #[test]
    fn validation_recurses_into_children() {
        static BAD_CHILD: [MenuItem; 1] = [MenuItem {
            label: "Orphan",
            target: None,
            children: None,
        }];
        let branch = MenuItem {
            label: "Parent",
            target: None,
            children: Some(&BAD_CHILD),
        };

        assert_eq!(
            validate(std::slice::from_ref(&branch)),
            Err(ConfigError::MissingTarget("Orphan"))
        );
    }
}
