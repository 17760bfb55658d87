//! Geschlossene inverse Kinematik für den planaren 2R-Arm.
//!
//! Der Solver ist zustandslos und rein: ein `ArmInputs`-Schnappschuss
//! rein, Gelenkwinkel (oder `IkError`) raus. Alle Rechnung in f64,
//! Winkel werden in Grad zurückgegeben.

use glam::DVec2;

/// Starre Gliedlängen des Arms in Welteinheiten.
///
/// Beide Längen müssen positiv und endlich sein; `solve` weist
/// degenerierte Arme explizit zurück statt durch Null zu teilen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkLengths {
    /// Länge Schulter → Ellbogen
    pub l1: f64,
    /// Länge Ellbogen → Endeffektor
    pub l2: f64,
}

impl LinkLengths {
    /// Erstellt ein Gliedlängen-Paar.
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// Gibt zurück, ob beide Längen positiv und endlich sind.
    pub fn is_valid(&self) -> bool {
        self.l1 > 0.0 && self.l2 > 0.0 && self.l1.is_finite() && self.l2.is_finite()
    }

    /// Äußerer Radius des erreichbaren Kreisrings (voll gestreckter Arm).
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Innerer Radius des erreichbaren Kreisrings (voll eingeklappter Arm).
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }
}

/// Gelenkwinkel in Grad: Schulter (theta1) und Ellbogen (theta2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAngles {
    /// Schulterwinkel gegen die X-Achse
    pub theta1_deg: f64,
    /// Ellbogenwinkel relativ zum ersten Glied
    pub theta2_deg: f64,
}

/// Fehlerfälle des Solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IkError {
    /// Ziel liegt außerhalb des erreichbaren Kreisrings (zu weit oder zu nah).
    UnreachableTarget,
    /// Gliedlängen sind nicht positiv oder nicht endlich.
    InvalidLinkLengths,
}

impl std::fmt::Display for IkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreachableTarget => {
                write!(f, "target is not reachable with the given link lengths")
            }
            Self::InvalidLinkLengths => write!(f, "link lengths must be positive and finite"),
        }
    }
}

impl std::error::Error for IkError {}

/// Unveränderlicher Schnappschuss der vier Nutzereingaben.
///
/// Die Presentation-Schicht besitzt den veränderlichen Zustand; bei jeder
/// Änderung wird dieser Schnappschuss als Ganzes an den Solver übergeben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmInputs {
    /// Zielposition des Endeffektors
    pub target: DVec2,
    /// Gliedlängen
    pub links: LinkLengths,
}

impl Default for ArmInputs {
    fn default() -> Self {
        Self {
            target: DVec2::new(2.0, 2.0),
            links: LinkLengths::new(2.0, 2.0),
        }
    }
}

/// Löst die inverse Kinematik für ein Ziel `target` und Gliedlängen `links`.
///
/// Kosinussatz über das Dreieck Ursprung–Ellbogen–Endeffektor:
/// `D = (x² + y² − L1² − L2²) / (2·L1·L2)` ist der Kosinus des
/// Ellbogenwinkels. `|D| > 1` bedeutet: Ziel außerhalb des Kreisrings.
///
/// Es wird ausschließlich die Elbow-Up-Konfiguration geliefert
/// (positive Wurzel in theta2); die gespiegelte Elbow-Down-Lösung
/// existiert, wird aber nie produziert.
pub fn solve(target: DVec2, links: LinkLengths) -> Result<JointAngles, IkError> {
    if !links.is_valid() {
        return Err(IkError::InvalidLinkLengths);
    }

    let d = (target.length_squared() - links.l1 * links.l1 - links.l2 * links.l2)
        / (2.0 * links.l1 * links.l2);

    if d.abs() > 1.0 {
        return Err(IkError::UnreachableTarget);
    }

    let theta2 = (1.0 - d * d).sqrt().atan2(d);
    let theta1 = target.y.atan2(target.x)
        - (links.l2 * theta2.sin()).atan2(links.l1 + links.l2 * theta2.cos());

    Ok(JointAngles {
        theta1_deg: theta1.to_degrees(),
        theta2_deg: theta2.to_degrees(),
    })
}

/// Vorwärtskinematik: Endeffektor-Position aus Gelenkwinkeln.
pub fn forward_kinematics(angles: JointAngles, links: LinkLengths) -> DVec2 {
    ArmPose::from_angles(angles, links).effector
}

/// Abgeleitete Gelenkpositionen einer Armkonfiguration.
///
/// Die Schulter sitzt immer im Ursprung; Ellbogen und Endeffektor
/// ergeben sich aus den Winkeln per Vorwärtskinematik.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    /// Position des Ellbogengelenks
    pub elbow: DVec2,
    /// Position des Endeffektors
    pub effector: DVec2,
    /// Die zugrunde liegenden Gelenkwinkel
    pub angles: JointAngles,
}

impl ArmPose {
    /// Berechnet die Gelenkpositionen aus Winkeln und Gliedlängen.
    pub fn from_angles(angles: JointAngles, links: LinkLengths) -> Self {
        let theta1 = angles.theta1_deg.to_radians();
        let theta12 = theta1 + angles.theta2_deg.to_radians();

        let elbow = DVec2::new(links.l1 * theta1.cos(), links.l1 * theta1.sin());
        let effector = elbow + DVec2::new(links.l2 * theta12.cos(), links.l2 * theta12.sin());

        Self {
            elbow,
            effector,
            angles,
        }
    }
}

#[cfg(test)]
mod tests;
