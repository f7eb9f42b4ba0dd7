//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : machine à états pilotée par les touches.
//!
//! État :
//! - `saisie`       : valeur à l’écran (texte en frappe / résultat / erreur)
//! - `en_attente`   : premier opérande + opérateur (None = rien en attente)
//! - `attente_second` : la prochaine frappe commence un nouveau nombre
//! - `memoire`      : registre M (survit à AC)
//! - `mode_angle`   : deg / rad (survit à AC)
//!
//! Contrats :
//! - Toutes les transitions sont totales : aucune ne panique ni ne renvoie d’erreur.
//! - Une erreur de domaine s’affiche "Error" ; la frappe suivante (ou AC) repart de "0".
//! - Un opérande illisible dans `calculer` => aucun changement d’état.

use tracing::debug;

use super::calcul::operer;
use super::erreur::ErreurDomaine;
use super::saisie::Saisie;
use super::scientifique;
use super::touches::{
    Chiffre, Constante, FonctionMemoire, FonctionSci, ModeAngle, Operateur, Touche,
};

/// Opération binaire en attente du second opérande.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub gauche: Saisie,
    pub op: Operateur,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    saisie: Saisie,
    en_attente: Option<Operation>,
    attente_second: bool,
    memoire: f64,
    mode_angle: ModeAngle,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::avec_mode(ModeAngle::default())
    }
}

impl Moteur {
    pub fn avec_mode(mode_angle: ModeAngle) -> Self {
        Self {
            saisie: Saisie::default(),
            en_attente: None,
            attente_second: false,
            memoire: 0.0,
            mode_angle,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte de l’écran.
    pub fn affichage(&self) -> String {
        self.saisie.texte()
    }

    pub fn est_en_erreur(&self) -> bool {
        self.saisie.est_erreur()
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn en_attente(&self) -> Option<&Operation> {
        self.en_attente.as_ref()
    }

    pub fn attend_second_operande(&self) -> bool {
        self.attente_second
    }

    /* ------------------------ Aiguillage ------------------------ */

    /// Une touche = une transition.
    pub fn presser(&mut self, touche: Touche) {
        debug!(%touche, "touche");

        match touche {
            Touche::Chiffre(c) => self.ajouter_chiffre(c),
            Touche::Operateur(op) => self.choisir_operateur(op),
            Touche::Egal => self.calculer(),
            Touche::Fonction(f) => self.appliquer_fonction(f),
            Touche::Constante(c) => self.inserer_constante(c),
            Touche::Angle(mode) => self.changer_mode(mode),
            Touche::Memoire(m) => self.fonction_memoire(m),
            Touche::EffaceTout => self.effacer_tout(),
            Touche::Supprime => self.supprimer_dernier(),
        }

        debug!(
            ecran = %self.affichage(),
            attente_second = self.attend_second_operande(),
            operateur = ?self.en_attente.as_ref().map(|o| o.op),
            "état"
        );
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre ou point décimal.
    pub fn ajouter_chiffre(&mut self, chiffre: Chiffre) {
        if self.saisie.est_erreur() {
            self.saisie = Saisie::default();
        }

        let c = chiffre.caractere();

        if self.attente_second {
            // "." seul n’est pas un nombre : on démarre à "0."
            let texte = if chiffre.est_point() {
                "0.".to_string()
            } else {
                c.to_string()
            };
            self.saisie = Saisie::Texte(texte);
            self.attente_second = false;
            return;
        }

        let mut texte = self.saisie.texte();
        if texte == "0" && !chiffre.est_point() {
            texte = c.to_string();
        } else if chiffre.est_point() && texte.contains('.') {
            return;
        } else {
            texte.push(c);
        }
        self.saisie = Saisie::Texte(texte);
    }

    /// Efface le dernier caractère ; jamais d’écran vide.
    pub fn supprimer_dernier(&mut self) {
        if self.saisie.est_erreur() {
            self.saisie = Saisie::default();
            return;
        }

        let mut texte = self.saisie.texte();
        texte.pop();
        // "1e+" ou "-" seuls ne se lisent pas : on les retire aussi
        let texte = texte.trim_end_matches(['+', '-']).trim_end_matches('e');
        if texte.is_empty() {
            self.saisie = Saisie::default();
        } else {
            self.saisie = Saisie::Texte(texte.to_string());
        }
    }

    /// AC : remet l’arithmétique à zéro (mémoire et mode conservés).
    pub fn effacer_tout(&mut self) {
        self.saisie = Saisie::default();
        self.en_attente = None;
        self.attente_second = false;
    }

    /* ------------------------ Opérateurs ------------------------ */

    pub fn choisir_operateur(&mut self, op: Operateur) {
        // changement d’avis : "3 + -" => "3 -"
        if self.attente_second {
            if let Some(operation) = self.en_attente.as_mut() {
                operation.op = op;
                return;
            }
        }

        // enchaînement : "3 + 4 *" => 7 puis attend le multiplicateur
        if self.en_attente.is_some() {
            self.calculer();
        }

        self.en_attente = Some(Operation {
            gauche: self.saisie.clone(),
            op,
        });
        self.attente_second = true;
    }

    /// "=" : résout l’opération en attente.
    pub fn calculer(&mut self) {
        let Some(operation) = self.en_attente.as_ref() else {
            return;
        };

        let (Some(a), Some(b)) = (operation.gauche.nombre(), self.saisie.nombre()) else {
            debug!("opérande illisible : calcul ignoré");
            return;
        };

        let r = operer(operation.op, a, b);
        self.deposer(r);
        self.en_attente = None;
        self.attente_second = true;
    }

    /* ------------------------ Fonctions ------------------------ */

    pub fn appliquer_fonction(&mut self, f: FonctionSci) {
        if self.saisie.est_erreur() {
            self.effacer_tout();
            return;
        }

        let Some(x) = self.saisie.nombre() else {
            return;
        };

        let r = scientifique::appliquer(f, x, self.mode_angle);
        self.deposer(r);
        self.attente_second = true;
    }

    /// pi / e : remplace la saisie ; les chiffres suivants s’y ajoutent.
    pub fn inserer_constante(&mut self, c: Constante) {
        self.saisie = Saisie::Valeur(c.valeur());
        self.attente_second = false;
    }

    pub fn changer_mode(&mut self, mode: ModeAngle) {
        self.mode_angle = mode;
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn fonction_memoire(&mut self, m: FonctionMemoire) {
        let valeur = self.saisie.nombre();

        match (m, valeur) {
            // MR n’exige pas une saisie lisible
            (FonctionMemoire::Rappel, _) => self.deposer(Ok(self.memoire)),
            (_, None) => return,
            (FonctionMemoire::Efface, Some(_)) => self.memoire = 0.0,
            (FonctionMemoire::Ajoute, Some(v)) => self.memoire += v,
            (FonctionMemoire::Retranche, Some(v)) => self.memoire -= v,
        }

        self.attente_second = true;
    }

    /* ------------------------ Interne ------------------------ */

    fn deposer(&mut self, r: Result<f64, ErreurDomaine>) {
        if let Err(e) = &r {
            debug!(erreur = %e, "erreur de domaine");
        }
        self.saisie = Saisie::depuis_resultat(r);
    }
}
