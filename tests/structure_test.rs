use ignite::config::ProjectConfig;
use ignite::constants::SUPPORTED_DATABASES;
use ignite::structure::{build_structure, default_structure, Node, Structure};

fn child<'a>(structure: &'a Structure, path: &[&str]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let node = structure.get(*first)?;
    if rest.is_empty() {
        return Some(node);
    }
    match node {
        Node::Directory(children) => child(children, rest),
        _ => None,
    }
}

fn keys(node: Option<&Node>) -> Vec<&str> {
    match node {
        Some(Node::Directory(children)) => {
            let mut keys: Vec<&str> = children.keys().map(String::as_str).collect();
            keys.sort_unstable();
            keys
        }
        other => panic!("Expected directory, got {:?}", other),
    }
}

#[test]
fn test_default_structure() {
    let structure = default_structure();

    let mut top: Vec<&str> = structure.keys().map(String::as_str).collect();
    top.sort_unstable();
    assert_eq!(
        top,
        vec![".envs", ".gitignore", "Makefile", "README.md", "cmd", "internal", "pkg"]
    );

    assert_eq!(child(&structure, &[".envs", ".local", "config.env"]), Some(&Node::file()));
    assert_eq!(child(&structure, &[".envs", "configs", "sqlc.yaml"]), Some(&Node::file()));
    assert_eq!(child(&structure, &["cmd", "server", "main.go"]), Some(&Node::file()));
    assert_eq!(child(&structure, &["cmd", "cli", "main.go"]), Some(&Node::file()));
    assert_eq!(
        keys(child(&structure, &["internal"])),
        vec!["handlers", "mock", "repository", "services"]
    );
    assert_eq!(child(&structure, &["pkg"]), Some(&Node::EmptyDirectory));
}

#[test]
fn test_database_tree_for_supported_databases() {
    for database in SUPPORTED_DATABASES {
        let config = ProjectConfig { database: database.to_string(), ..Default::default() };
        let structure = build_structure(&config).unwrap();

        let db_node = child(&structure, &["internal", database]);
        assert_eq!(keys(db_node), vec!["generated", "migrations", "mock", "queries"]);
        if let Some(Node::Directory(children)) = db_node {
            assert!(children.values().all(|node| *node == Node::EmptyDirectory));
        }
    }
}

#[test]
fn test_no_database_tree_without_database() {
    let structure = build_structure(&ProjectConfig::default()).unwrap();
    assert_eq!(structure, default_structure());
    for database in SUPPORTED_DATABASES {
        assert!(child(&structure, &["internal", database]).is_none());
    }
}

#[test]
fn test_full_configuration() {
    let config = ProjectConfig {
        database: "postgres".to_string(),
        controller: "grpc".to_string(),
        with_workflow: true,
        with_dockerfile: true,
        ..Default::default()
    };
    let structure = build_structure(&config).unwrap();

    assert_eq!(
        keys(child(&structure, &["internal", "postgres"])),
        vec!["generated", "migrations", "mock", "queries"]
    );
    assert_eq!(keys(child(&structure, &["gapi"])), vec!["generated", "proto"]);
    assert_eq!(child(&structure, &[".github", "workflows", "ci.yml"]), Some(&Node::file()));
    assert_eq!(child(&structure, &["Dockerfile"]), Some(&Node::file()));

    for (name, node) in default_structure() {
        if name != "internal" {
            assert_eq!(structure.get(&name), Some(&node));
        }
    }
}

#[test]
fn test_http_controller_has_no_gapi() {
    let config = ProjectConfig { controller: "http".to_string(), ..Default::default() };
    let structure = build_structure(&config).unwrap();
    assert!(structure.get("gapi").is_none());
    assert!(structure.get(".github").is_none());
    assert!(structure.get("Dockerfile").is_none());
}
