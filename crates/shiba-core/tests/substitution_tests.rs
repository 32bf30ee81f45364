mod common;

use common::fixture_catalog;
use shiba_core::{
    equipment::tags_for, models::Target, Catalog, DuplicatePolicy, NotFoundKind,
    ResolvedSubstitutionView, SubstitutionResolver,
};

#[test]
fn test_reset_returns_original_for_every_exercise() {
    let catalog = fixture_catalog();
    let resolver = SubstitutionResolver::new(&catalog);

    for exercise in catalog.all_exercises() {
        let view = resolver
            .substitute(&exercise.id, &exercise.id)
            .expect("reset must succeed for catalog exercises");
        assert_eq!(view, ResolvedSubstitutionView::Original(exercise.clone()));

        // Resetting after a swap is still the original.
        if let Some(candidate) = exercise.substitutions.first() {
            resolver.substitute(&exercise.id, &candidate.id).unwrap();
            let again = resolver.substitute(&exercise.id, &exercise.id).unwrap();
            assert_eq!(again, view);
        }
    }
}

#[test]
fn test_identity_schedule_split_for_every_candidate() {
    let catalog = fixture_catalog();
    let resolver = SubstitutionResolver::new(&catalog);

    for original in catalog.all_exercises() {
        for candidate in &original.substitutions {
            let view = resolver.substitute(&original.id, &candidate.id).unwrap();

            assert_eq!(view.id(), candidate.id);
            assert_eq!(view.name(), candidate.name);
            assert_eq!(view.muscle(), candidate.muscle);
            assert_eq!(view.equipment(), candidate.equipment);
            assert_eq!(view.body_part(), candidate.body_part);

            assert_eq!(view.week(), original.week);
            assert_eq!(view.workout_type(), original.workout_type);
            assert_eq!(view.working_sets(), &original.working_sets);
            assert_eq!(view.reps(), original.reps);
            assert_eq!(view.rest(), original.rest);
            assert_eq!(view.notes(), original.notes);
            assert_eq!(view.substitutions(), original.substitutions.as_slice());
        }
    }
}

#[test]
fn test_options_never_leave_declared_list() {
    let catalog = fixture_catalog();
    let resolver = SubstitutionResolver::new(&catalog);

    for original in catalog.all_exercises() {
        let options = resolver.resolve_substitutes(&original.id).unwrap();
        let declared: Vec<_> = original.substitutions.iter().map(|c| &c.id).collect();

        assert_eq!(options.len(), declared.len());
        for option in &options {
            assert!(declared.contains(&&option.id));
        }
    }
}

#[test]
fn test_not_found_kinds_are_distinct() {
    let catalog = fixture_catalog();
    let resolver = SubstitutionResolver::new(&catalog);

    let unknown_original = resolver.substitute("unknown-id", "x").unwrap_err();
    let unknown_sub = resolver.substitute("bench1", "unknown-sub-id").unwrap_err();

    assert_eq!(unknown_original.kind, NotFoundKind::OriginalExercise);
    assert_eq!(unknown_sub.kind, NotFoundKind::Substitution);
    assert_ne!(unknown_original.kind, unknown_sub.kind);
}

#[test]
fn test_candidate_of_other_exercise_is_rejected() {
    let catalog = fixture_catalog();
    let err = SubstitutionResolver::new(&catalog)
        .substitute("bench1", "lat_pulldown")
        .unwrap_err();
    assert_eq!(err.kind, NotFoundKind::Substitution);
}

#[test]
fn test_lookup_symmetry() {
    let catalog = fixture_catalog();
    for exercise in catalog.all_exercises() {
        assert_eq!(catalog.exercise(&exercise.id), Some(exercise));
    }
}

#[test]
fn test_tags_are_deterministic_across_catalog() {
    let catalog = fixture_catalog();
    for exercise in catalog.all_exercises() {
        assert_eq!(tags_for(exercise), tags_for(&exercise.clone()));
    }
}

#[test]
fn test_malformed_candidates_are_tolerated() {
    let catalog = fixture_catalog();
    let resolver = SubstitutionResolver::new(&catalog);

    let options = resolver.resolve_substitutes("pullup1").unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].id, "lat_pulldown");

    let options = resolver.resolve_substitutes("squat1").unwrap();
    assert_eq!(options[0].body_part, "");
    assert_eq!(options[0].equipment_name, "Smith Machine");
}

#[test]
fn test_bench_press_scenario() {
    let catalog = Catalog::from_json_str(
        r#"{
            "muscles": {},
            "equipment": {},
            "exercises": [{
                "id": "bench1", "name": "Barbell Bench Press", "week": 1,
                "workout_type": "Upper (Strength)", "working_sets": 3,
                "reps": "6-8", "rest": "2-3 min",
                "substitutions": [{"id": "db_bench", "name": "Dumbbell Bench Press",
                                   "muscle": "Chest", "equipment": "Dumbbell",
                                   "body_part": "Push"}]
            }]
        }"#,
        DuplicatePolicy::FirstWins,
    )
    .unwrap();
    let resolver = SubstitutionResolver::new(&catalog);

    let options = serde_json::to_value(resolver.resolve_substitutes("bench1").unwrap()).unwrap();
    assert_eq!(
        options,
        serde_json::json!([{
            "id": "db_bench",
            "name": "Dumbbell Bench Press",
            "muscle": "Chest",
            "equipment": "Dumbbell",
            "equipment_name": "Dumbbell",
            "body_part": "Push"
        }])
    );

    let view = resolver.substitute("bench1", "db_bench").unwrap();
    assert_eq!(view.id(), "db_bench");
    assert_eq!(view.week(), 1);
    assert_eq!(view.working_sets(), &Target::from(3));
    assert_eq!(view.reps(), "6-8");
    assert_eq!(view.rest(), "2-3 min");
    assert_eq!(view.substitutions().len(), 1);

    let reset = resolver.substitute("bench1", "bench1").unwrap();
    assert_eq!(
        reset,
        ResolvedSubstitutionView::Original(catalog.exercise("bench1").unwrap().clone())
    );

    let err = resolver.substitute("bench1", "nonexistent").unwrap_err();
    assert_eq!(err.kind, NotFoundKind::Substitution);
}
