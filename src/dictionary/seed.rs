//! Built-in seed table for the code dictionary.
//!
//! Stem codes use the dotted three-axis form (target.action.means);
//! extension codes are undotted. The table is merged into the store by
//! `CodeDictionary::initialize` and can be overwritten entry-by-entry by
//! runtime imports. Regenerated offline from `export_all` snapshots.

/// Compiled-in `(code, description)` pairs.
pub(crate) const SEED_ENTRIES: &[(&str, &str)] = &[
    // Assessment interventions
    ("BBM.AA.AF", "Assessment of respiratory functions using measurement device"),
    ("KAS.AA.ZZ", "Assessment of gait pattern functions"),
    ("MAA.AB.AD", "Assessment of muscle power functions using dynamometry"),
    ("SAA.AA.ZZ", "Assessment of skin integrity"),
    ("UAB.AB.ZZ", "Assessment of orientation functions"),
    ("VEB.AA.AF", "Assessment of cardiovascular functions using monitoring device"),
    // Therapeutic interventions
    ("BBM.PH.AF", "Breathing exercises using incentive device"),
    ("KAB.DB.AD", "Therapeutic exercise for joint mobility functions"),
    ("KAS.JB.AE", "Gait training using assistive walking product"),
    ("MAA.PH.ZZ", "Progressive resistance training of muscle power functions"),
    ("NAB.DB.ZZ", "Range of motion exercises of the upper limb"),
    ("NFA.DB.AD", "Therapeutic exercise of the lower limb using equipment"),
    ("SAB.SE.AC", "Wound dressing using sterile technique"),
    ("SAB.TF.ZZ", "Debridement of skin lesion"),
    ("UAB.PM.ZZ", "Cognitive stimulation therapy"),
    ("VEB.DB.AD", "Cardiovascular conditioning exercise using ergometer"),
    // Administration of medication and related substances
    ("DRA.DA.AH", "Administration of medication, oral route"),
    ("DRA.DA.AJ", "Administration of medication, intramuscular route"),
    ("DRA.DA.AK", "Administration of medication, intravenous route"),
    ("VWA.DA.AJ", "Administration of vaccine, intramuscular route"),
    // Education and counselling
    ("PGB.VB.ZZ", "Education about self-management of chronic condition"),
    ("PGB.VD.ZZ", "Counselling about tobacco use cessation"),
    ("PHB.VB.ZZ", "Education about nutrition and dietary intake"),
    ("PMA.VD.ZZ", "Counselling about physical activity"),
    ("RCB.VB.ZZ", "Education about medication adherence"),
    // Support and environment
    ("QEA.SD.AE", "Provision of assistive product for personal mobility"),
    ("QEB.SD.AE", "Provision of assistive product for self-care"),
    ("RDB.TE.ZZ", "Care coordination across service providers"),
    // Extension codes - anatomy and laterality
    ("XA1", "Left side"),
    ("XA2", "Right side"),
    ("XA3", "Bilateral"),
    // Extension codes - quantification
    ("XK1", "Single encounter"),
    ("XK2", "Repeated encounters, short series"),
    ("XK3", "Repeated encounters, extended series"),
    // Extension codes - delivery context
    ("XM1", "Delivered in inpatient setting"),
    ("XM2", "Delivered in outpatient setting"),
    ("XM3", "Delivered in home or community setting"),
    ("XM4", "Delivered by telehealth"),
    // Extension codes - recipient
    ("XP1", "Directed to the individual"),
    ("XP2", "Directed to the caregiver"),
];

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
