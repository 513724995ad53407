//! Scénarios de bout en bout : suites de touches -> (résultat, équation).
//!
//! Chaque test part d’une calculatrice neuve à tirage fixe, pour rester déterministe.

use pretty_assertions::assert_eq;

use super::aleatoire::SourceAleatoire;
use super::Calculatrice;

struct Fixe(f64);

impl SourceAleatoire for Fixe {
    fn echantillon(&mut self) -> f64 {
        self.0
    }
}

/// Une touche : opérande littéral ou symbole (opérateur ou variable).
enum T {
    N(f64),
    S(&'static str),
    V(&'static str),
}

fn joue(c: &mut Calculatrice, touches: &[T]) {
    for t in touches {
        match t {
            T::N(v) => c.set_operand(*v),
            T::S(s) => c.perform_operation(s),
            T::V(nom) => c.set_operand(*nom),
        }
    }
}

fn calc_apres(touches: &[T]) -> Calculatrice {
    let mut c = Calculatrice::avec_source(Fixe(0.125));
    joue(&mut c, touches);
    c
}

#[test]
fn addition_simple() {
    let c = calc_apres(&[T::N(3.0), T::S("+"), T::N(4.0), T::S("=")]);
    assert_eq!(c.output(), 7.0);
    assert_eq!(c.description(), "3+4");
    assert!(!c.is_partial_result());
    assert!(c.ends_in_operand());
}

#[test]
fn partiel_avant_egal() {
    let c = calc_apres(&[T::N(3.0), T::S("+"), T::N(4.0)]);
    assert!(c.is_partial_result());
    assert_eq!(c.description(), "3+");
    assert_eq!(c.output(), 4.0);
}

#[test]
fn racine_seule() {
    let c = calc_apres(&[T::N(9.0), T::S("√")]);
    assert_eq!(c.output(), 3.0);
    assert_eq!(c.description(), "√(9)");
}

#[test]
fn gauche_a_droite_sans_priorite() {
    let mut c = calc_apres(&[T::N(2.0), T::S("+"), T::N(3.0), T::S("×")]);
    assert_eq!(c.output(), 5.0);
    assert!(c.is_partial_result());
    assert_eq!(c.description(), "2+3×");

    joue(&mut c, &[T::N(4.0), T::S("=")]);
    assert_eq!(c.output(), 20.0);
    assert_eq!(c.description(), "2+3×4");
}

#[test]
fn deux_binaires_de_suite() {
    let mut c = calc_apres(&[T::N(3.0), T::S("+")]);
    assert_eq!(c.description(), "3+");
    assert_eq!(c.output(), 3.0);

    joue(&mut c, &[T::S("×")]);
    assert_eq!(c.description(), "3+3×");
    assert!(c.is_partial_result());
    // un binaire résout d’abord l’attente, puis s’installe : le "+" donne 3+3,
    // et le "×" garde 6 comme premier opérande (pas 3)
    assert_eq!(c.output(), 6.0);

    joue(&mut c, &[T::N(2.0), T::S("=")]);
    assert_eq!(c.output(), 12.0);
    assert_eq!(c.description(), "3+3×2");
}

#[test]
fn variable_puis_rejeu() {
    let mut c = Calculatrice::avec_source(Fixe(0.0));
    c.set_variable("x", 5.0);
    joue(&mut c, &[T::V("x"), T::S("+"), T::N(1.0), T::S("=")]);
    assert_eq!(c.output(), 6.0);
    assert_eq!(c.description(), "x+1");

    c.set_variable("x", 10.0);
    c.rerun_program();
    assert_eq!(c.output(), 11.0);
    assert_eq!(c.description(), "x+1");
}

#[test]
fn unaire_apres_resultat_enveloppe_tout() {
    let c = calc_apres(&[T::N(3.0), T::S("+"), T::N(6.0), T::S("="), T::S("√")]);
    assert_eq!(c.output(), 3.0);
    assert_eq!(c.description(), "√(3+6)");
}

#[test]
fn unaire_en_cours_d_expression() {
    let c = calc_apres(&[T::N(3.0), T::S("+"), T::N(4.0), T::S("√"), T::S("=")]);
    assert_eq!(c.output(), 5.0);
    assert_eq!(c.description(), "3+√(4)");
}

#[test]
fn unaires_empiles_apres_un_binaire() {
    let c = calc_apres(&[
        T::N(9.0),
        T::S("√"),
        T::S("+"),
        T::N(16.0),
        T::S("√"),
        T::S("√"),
        T::S("="),
    ]);
    assert_eq!(c.output(), 5.0);
    assert_eq!(c.description(), "√(9)+√(√(16))");
}

#[test]
fn constante_et_unaire() {
    let c = calc_apres(&[T::N(1.0), T::S("+"), T::S("π"), T::S("cos"), T::S("=")]);
    assert_eq!(c.output(), 0.0);
    assert_eq!(c.description(), "1+cos(π)");
}

#[test]
fn constante_recommence_une_expression_terminee() {
    let c = calc_apres(&[T::N(3.0), T::S("+"), T::N(4.0), T::S("="), T::S("e")]);
    assert_eq!(c.output(), std::f64::consts::E);
    assert_eq!(c.description(), "e");
}

#[test]
fn enchainement_apres_egal() {
    let c = calc_apres(&[
        T::N(3.0),
        T::S("+"),
        T::N(4.0),
        T::S("="),
        T::S("×"),
        T::N(2.0),
        T::S("="),
    ]);
    assert_eq!(c.output(), 14.0);
    assert_eq!(c.description(), "3+4×2");
}

#[test]
fn puissance_et_log2() {
    let c = calc_apres(&[T::N(2.0), T::S("^"), T::N(10.0), T::S("="), T::S("log2")]);
    assert_eq!(c.output(), 10.0);
    assert_eq!(c.description(), "log2(2^10)");
}

#[test]
fn egal_sans_operande_reprend_l_accumulateur() {
    let c = calc_apres(&[T::N(5.0), T::S("×"), T::S("=")]);
    assert_eq!(c.output(), 25.0);
    assert_eq!(c.description(), "5×5");
}

#[test]
fn tirage_dans_l_equation() {
    let c = calc_apres(&[T::N(2.0), T::S("×"), T::S("Ran"), T::S("=")]);
    assert_eq!(c.output(), 0.25);
    assert_eq!(c.description(), "2×0.125");
}

#[test]
fn symbole_inconnu_ignore() {
    let c = calc_apres(&[T::N(3.0), T::S("+"), T::S("mod"), T::N(4.0), T::S("=")]);
    assert_eq!(c.output(), 7.0);
    assert_eq!(c.description(), "3+4");
    assert_eq!(c.program().len(), 5);
}

#[test]
fn nan_se_propage_sans_arreter() {
    let c = calc_apres(&[T::N(-1.0), T::S("√"), T::S("+"), T::N(1.0), T::S("=")]);
    assert!(c.output().is_nan());
    assert_eq!(c.description(), "√(-1)+1");
}

#[test]
fn undo_puis_reprise() {
    let mut c = calc_apres(&[T::N(3.0), T::S("+"), T::N(4.0), T::S("=")]);
    c.undo();
    assert!(c.is_partial_result());
    assert_eq!(c.description(), "3+");
    assert_eq!(c.output(), 4.0);

    joue(&mut c, &[T::S("√"), T::S("=")]);
    assert_eq!(c.output(), 5.0);
    assert_eq!(c.description(), "3+√(4)");
}

#[test]
fn export_import_du_programme() {
    let mut c = Calculatrice::avec_source(Fixe(0.0));
    c.set_variable("r", 2.0);
    joue(&mut c, &[T::S("π"), T::S("×"), T::V("r"), T::S("^"), T::N(2.0), T::S("=")]);
    let json = c.export_program().unwrap();
    assert_eq!(json, r#"["π","×","r","^",2.0,"="]"#);

    let mut d = Calculatrice::avec_source(Fixe(0.0));
    d.import_program(&json).unwrap();
    assert_eq!(d.description(), c.description());
    // import = remise à zéro totale : r vaut 0
    assert_eq!(d.output(), 0.0);

    d.set_variable("r", 2.0);
    d.rerun_program();
    assert_eq!(d.output().to_bits(), c.output().to_bits());
}
