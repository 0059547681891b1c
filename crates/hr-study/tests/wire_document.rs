//! The default study must produce the bracket example's request bodies.

use hr_study::Study;
use serde_json::json;

#[test]
fn default_harmonic_model_matches_bracket_example() {
    let study = Study::default();
    let model = study.harmonic_model("region1").to_json().unwrap();

    assert_eq!(model["type"], "HARMONIC_ANALYSIS");
    assert_eq!(
        model["elementTechnology"],
        json!({ "elementTechnology3D": { "definitionMethod": { "type": "AUTOMATIC" } } })
    );
    assert_eq!(model["globalPhysics"], json!({ "enableGlobalDamping": false }));
    assert_eq!(model["model"], json!({}));
    assert_eq!(model["initialConditions"], json!({}));
    assert_eq!(model["resultControl"], json!({}));

    let material = &model["materials"][0];
    assert_eq!(material["name"], "Steel");
    assert_eq!(
        material["topologicalReference"],
        json!({ "entities": ["region1"] })
    );
    let iso = &material["materialBehavior"]["directionalDependency"];
    assert_eq!(iso["youngsModulus"]["value"]["value"], 200e9);
    assert_eq!(iso["youngsModulus"]["unit"], "Pa");
    assert_eq!(iso["poissonsRatio"]["value"], 0.3);
    assert_eq!(material["density"]["value"]["value"], 7850.0);

    let bcs = model["boundaryConditions"].as_array().unwrap();
    assert_eq!(bcs.len(), 2);
    assert_eq!(bcs[0]["type"], "FIXED_SUPPORT");
    assert_eq!(
        bcs[0]["topologicalReference"]["entities"],
        json!(["B1_TE42", "B1_TE70", "B1_TE98", "B1_TE378"])
    );
    assert_eq!(bcs[1]["type"], "FORCE_LOAD");
    assert_eq!(bcs[1]["force"]["value"]["z"]["value"], -1000.0);
    assert_eq!(
        bcs[1]["topologicalReference"]["entities"],
        json!(["B1_TE150", "B1_TE153"])
    );

    let numerics = &model["numerics"];
    assert_eq!(numerics["harmonicSolutionMethod"], "MODAL_BASED");
    assert_eq!(numerics["modalBase"]["solver"]["type"], "MUMPS");
    assert_eq!(numerics["modalBase"]["solverModel"], json!({}));
    assert_eq!(
        numerics["modalBase"]["calculateFrequency"],
        json!({ "precShift": 0.05, "maxIterShift": 3, "thresholdFrequency": 0.01 })
    );
    assert_eq!(
        numerics["modalBase"]["eigenMode"],
        json!({ "threshold": 1e-6, "precisionShift": 0.05 })
    );
    assert_eq!(numerics["harmonicResponse"], json!({ "solver": { "type": "MUMPS" } }));

    let control = &model["simulationControl"];
    assert_eq!(
        control["modalBase"]["eigenfrequencyScope"],
        json!({ "type": "FIRSTMODE", "numberOfModes": 10 })
    );
    let freqs = &control["harmonicResponse"]["excitationFrequencies"];
    assert_eq!(freqs["type"], "LIST_V20");
    assert_eq!(freqs["startFrequency"], json!({ "value": 10.0, "unit": "Hz" }));
    assert_eq!(freqs["endFrequency"], json!({ "value": 1000.0, "unit": "Hz" }));
    assert_eq!(control["processors"], json!({ "numOfProcessors": -1 }));
    assert_eq!(control["maxRunTime"], json!({ "value": 18000.0, "unit": "s" }));
}

#[test]
fn simulation_spec_carries_geometry_and_no_mesh() {
    let spec = Study::default()
        .simulation_spec("geo-42", "solid_1")
        .unwrap();
    assert_eq!(spec.name, "Harmonic Response");
    assert_eq!(spec.geometry_id, "geo-42");
    assert_eq!(spec.mesh_id, None);
    assert_eq!(
        spec.model["materials"][0]["topologicalReference"]["entities"],
        json!(["solid_1"])
    );
}

#[test]
fn import_and_mesh_requests_follow_study() {
    let study = Study::default();

    let import = serde_json::to_value(study.geometry_import_request("st-9")).unwrap();
    assert_eq!(
        import,
        json!({
            "name": "Bracket",
            "location": { "storageId": "st-9" },
            "format": "STEP",
            "inputUnit": "m",
            "options": { "facetSplit": false, "sewing": false, "improve": true }
        })
    );

    let mesh = serde_json::to_value(study.mesh_operation("geo-1").unwrap()).unwrap();
    assert_eq!(
        mesh,
        json!({
            "name": "Mesh",
            "geometryId": "geo-1",
            "model": {
                "type": "SIMMETRIX_MESHING_SOLID",
                "sizing": { "type": "AUTOMATIC_V9", "fineness": 5 }
            }
        })
    );

    let project = serde_json::to_value(study.project()).unwrap();
    assert_eq!(
        project,
        json!({
            "name": "Harmonic Response Example",
            "description": "Harmonic response analysis example",
            "measurementSystem": "SI"
        })
    );

    assert_eq!(study.simulation_run().name, "Run 1");
}
