use std::collections::HashSet;

use cssheet_test_helpers::fixtures;
use cssheet_test_helpers::project::TestProject;
use rayon::prelude::*;

#[test]
fn test_parallel_resolutions_mint_unique_ids() {
    let session = TestProject::new()
        .file("/project/app.ts", fixtures::importer_with_assertion())
        .file("/project/a.css", fixtures::simple_stylesheet())
        .build();

    let ids: Vec<String> = (0..256)
        .into_par_iter()
        .map(|_| {
            session
                .resolve("./a.css", "/project/app.ts")
                .unwrap()
                .unwrap()
        })
        .collect();

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(session.plugin.registry().len(), ids.len());

    let modules: Vec<Option<String>> = ids
        .par_iter()
        .map(|id| session.load(id).unwrap())
        .collect();
    assert!(modules
        .iter()
        .all(|m| m.as_deref().is_some_and(|src| src.contains("body{color:red}"))));
}

#[test]
fn test_interleaved_modules_stay_independent() {
    let session = TestProject::new()
        .file(
            "/project/a.ts",
            "import a from './a.css' with { type: 'css' };",
        )
        .file(
            "/project/b.ts",
            "import b from './b.css' with { type: 'css' };",
        )
        .file("/project/a.css", "a{}")
        .file("/project/b.css", "b{}")
        .build();

    let results: Vec<(char, String)> = (0..64)
        .into_par_iter()
        .map(|i| {
            let (name, importer, source) = if i % 2 == 0 {
                ('a', "/project/a.ts", "./a.css")
            } else {
                ('b', "/project/b.ts", "./b.css")
            };
            let id = session.resolve(source, importer).unwrap().unwrap();
            (name, session.load(&id).unwrap().unwrap())
        })
        .collect();

    for (name, module) in results {
        assert!(module.contains(&format!("`{}{{}}`", name)));
    }
}
