use folio::content::{self, builtin, ContentError};
use folio::models::*;
use speculate2::speculate;
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_content(dir: &TempDir, portfolio: &Portfolio) -> PathBuf {
    let path = dir.path().join("content.json");
    let json = serde_json::to_string_pretty(portfolio).expect("Failed to serialize content");
    std::fs::write(&path, json).expect("Failed to write content file");
    path
}

speculate! {
    before {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let portfolio = builtin();
    }

    describe "builtin content" {
        it "has roles to cycle through" {
            assert_eq!(portfolio.profile.roles.len(), 5);
            assert!(portfolio.profile.roles.iter().all(|role| !role.is_empty()));
        }

        it "passes validation" {
            assert!(content::validate(&portfolio).is_ok());
        }

        it "only uses categories that have a filter tab" {
            let tabs: HashSet<&str> = portfolio
                .project_categories
                .iter()
                .map(|tab| tab.id.as_str())
                .collect();
            for project in &portfolio.projects {
                assert!(tabs.contains(project.category.as_str()), "{}", project.category);
            }
        }

        it "keeps skill levels within 0 to 100" {
            for category in &portfolio.skills {
                for skill in &category.skills {
                    assert!(skill.level <= 100, "{} at {}", skill.name, skill.level);
                }
            }
        }

        it "has a skills tab for the default selection" {
            assert!(portfolio.skill_category("frontend").is_some());
        }
    }

    describe "load" {
        it "falls back to the builtin content without a path" {
            let loaded = content::load(None).expect("Failed to load content");
            assert_eq!(loaded, portfolio);
        }

        it "reads a content file with the same shape" {
            let mut custom = portfolio.clone();
            custom.profile.name = "Grace Hopper".to_string();
            custom.profile.roles = vec!["Admiral".to_string()];
            let path = write_content(&dir, &custom);

            let loaded = content::load(Some(path.as_path())).expect("Failed to load content");

            assert_eq!(loaded.profile.name, "Grace Hopper");
            assert_eq!(loaded, custom);
        }
    }

    describe "from_file" {
        it "reports a missing file" {
            let result = content::from_file(&dir.path().join("absent.json"));
            assert!(matches!(result, Err(ContentError::Read { .. })));
        }

        it "reports malformed json" {
            let path = dir.path().join("broken.json");
            std::fs::write(&path, "{ \"profile\": ").expect("Failed to write file");

            let result = content::from_file(&path);

            assert!(matches!(result, Err(ContentError::Parse { .. })));
        }

        it "rejects an empty role list" {
            let mut custom = portfolio.clone();
            custom.profile.roles.clear();
            let path = write_content(&dir, &custom);

            let err = content::from_file(&path).unwrap_err();

            assert!(err.to_string().contains("at least one role"));
        }

        it "rejects duplicate project ids" {
            let mut custom = portfolio.clone();
            let mut copy = custom.projects[0].clone();
            copy.title = "Another".to_string();
            custom.projects.push(copy);
            let path = write_content(&dir, &custom);

            let err = content::from_file(&path).unwrap_err();

            assert!(matches!(err, ContentError::Invalid(_)));
            assert!(err.to_string().contains("duplicate project id 1"));
        }
    }
}
