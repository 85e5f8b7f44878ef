//! Case file generation against a populated data directory

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use tracers_fetcher::app::case_file::{
    read_case_file, CaseFileBuilder, CaseFileRequest, Layout,
};
use tracers_fetcher::app::Satellite;
use tracers_fetcher::errors::CaseFileError;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"cdf").unwrap();
}

fn populate(layout: &Layout) {
    let run = layout.run_dir("december_storm");

    for name in [
        "ts2_l2_aci_ipd_20251203_v1.0.0.cdf",
        "ts2_l2_aci_ipd_20251201_v1.2.0.cdf",
        "ts2_l2_aci_ipd_20251202_v1.0.0.cdf",
        "ts1_l2_aci_ipd_20251201_v1.0.0.cdf",
        "ts2_l2_aci_ipd_20251201_v1.2.0.cdf.tmp",
    ] {
        touch(&run.join("aci").join(name));
    }

    for name in [
        "ts2_def_ead_20251202_v1.0.0.cdf",
        "ts2_def_ead_20251201_v1.0.0.cdf",
    ] {
        touch(&run.join("ead").join(name));
    }

    touch(&run.join("omni").join("omni_hro_1min_20251201_v01.cdf"));
    touch(&run.join("omni").join("2025").join("omni_hro_1min_20251202_v01.cdf"));
    touch(&run.join("omni_readme.txt"));
}

fn request(satellite: &str) -> CaseFileRequest {
    CaseFileRequest {
        run_name: "december_storm".to_string(),
        satellite: satellite.to_string(),
        reverse_effect: true,
        inverse_effect: false,
    }
}

fn file_names(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            Path::new(p)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_case_file_collects_sorted_instrument_files() {
    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::rooted_at(temp_dir.path());
    populate(&layout);

    let written = CaseFileBuilder::new(layout.clone())
        .build(&request("ts2"))
        .unwrap();
    let case_file = &written.case_file;

    assert_eq!(case_file.storm_name, "december_storm");
    assert_eq!(case_file.satellite, Satellite::Ts2);
    assert_eq!(
        file_names(&case_file.aci_files),
        vec![
            "ts2_l2_aci_ipd_20251201_v1.2.0.cdf",
            "ts2_l2_aci_ipd_20251202_v1.0.0.cdf",
            "ts2_l2_aci_ipd_20251203_v1.0.0.cdf",
        ]
    );
    assert_eq!(
        file_names(&case_file.ead_files),
        vec![
            "ts2_def_ead_20251201_v1.0.0.cdf",
            "ts2_def_ead_20251202_v1.0.0.cdf",
        ]
    );

    let mut omniweb = file_names(&case_file.omniweb_files);
    omniweb.sort();
    assert_eq!(
        omniweb,
        vec![
            "omni_hro_1min_20251201_v01.cdf",
            "omni_hro_1min_20251202_v01.cdf",
        ]
    );

    assert!(case_file.reverse_effect);
    assert!(!case_file.inverse_effect);
    assert_eq!(
        written.path,
        layout.case_dir.join("december_storm_TS2.json")
    );
    assert!(layout.plot_dir("december_storm", Satellite::Ts2).is_dir());
}

#[test]
fn test_case_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::rooted_at(temp_dir.path());
    populate(&layout);

    let written = CaseFileBuilder::new(layout).build(&request("TS2")).unwrap();
    let reread = read_case_file(&written.path).unwrap();

    assert_eq!(reread, written.case_file);

    let text = fs::read_to_string(&written.path).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\n    \"OMNIWEB_FILES\": ["));
}

#[test]
fn test_other_satellite_sees_only_its_files() {
    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::rooted_at(temp_dir.path());
    populate(&layout);

    let written = CaseFileBuilder::new(layout).build(&request("ts1")).unwrap();

    assert_eq!(
        file_names(&written.case_file.aci_files),
        vec!["ts1_l2_aci_ipd_20251201_v1.0.0.cdf"]
    );
    assert!(written.case_file.ead_files.is_empty());
    // auxiliary files are shared by both spacecraft
    assert_eq!(written.case_file.omniweb_files.len(), 2);
}

#[test]
fn test_omniweb_files_keep_directory_order() {
    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::rooted_at(temp_dir.path());
    let omni_dir = layout.run_dir("december_storm").join("omni");
    for name in [
        "omni_b.cdf",
        "omni_m.cdf",
        "omni_a.cdf",
        "omni_c.cdf",
        "omni_z.cdf",
    ] {
        touch(&omni_dir.join(name));
    }

    let listed: Vec<String> = fs::read_dir(&omni_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path().to_string_lossy().into_owned())
        .collect();

    let written = CaseFileBuilder::new(layout).build(&request("ts2")).unwrap();
    assert_eq!(written.case_file.omniweb_files, listed);
}

#[cfg(unix)]
#[test]
fn test_symlinked_inputs_are_listed() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::rooted_at(temp_dir.path());
    let shared = temp_dir.path().join("shared");
    let run = layout.run_dir("december_storm");

    touch(&shared.join("ts2_l2_aci_ipd_20251201_v1.0.0.cdf"));
    touch(&shared.join("omni_hro_1min_20251201_v01.cdf"));
    fs::create_dir_all(run.join("aci")).unwrap();
    symlink(
        shared.join("ts2_l2_aci_ipd_20251201_v1.0.0.cdf"),
        run.join("aci").join("ts2_l2_aci_ipd_20251201_v1.0.0.cdf"),
    )
    .unwrap();
    symlink(
        shared.join("omni_hro_1min_20251201_v01.cdf"),
        run.join("omni_hro_1min_20251201_v01.cdf"),
    )
    .unwrap();

    let written = CaseFileBuilder::new(layout).build(&request("ts2")).unwrap();

    assert_eq!(
        file_names(&written.case_file.aci_files),
        vec!["ts2_l2_aci_ipd_20251201_v1.0.0.cdf"]
    );
    assert_eq!(
        file_names(&written.case_file.omniweb_files),
        vec!["omni_hro_1min_20251201_v01.cdf"]
    );
}

#[test]
fn test_invalid_satellite_writes_no_case_file() {
    let temp_dir = TempDir::new().unwrap();
    let layout = Layout::rooted_at(temp_dir.path());
    populate(&layout);

    let result = CaseFileBuilder::new(layout.clone()).build(&request("TS3"));

    match result {
        Err(CaseFileError::InvalidSatellite { value }) => assert_eq!(value, "TS3"),
        other => panic!("expected InvalidSatellite, got {:?}", other),
    }
    assert!(!layout.case_dir.exists());
    assert!(!layout.output_root.exists());
}
