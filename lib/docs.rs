//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Matrix elements](#matrix-elements)
//! - [Diagonalization](#diagonalization)
//! - [Units](#units)
//!
//! # Background
//! We want bound states of the one-dimensional time-independent Schrödinger
//! equation (TISE)
//! ```text
//!    ħ² ∂²
//! - --- --- ψ(x) + V(x) ψ(x) = E ψ(x)
//!   2 m ∂x²
//! ```
//! for a particle confined to the box [0, *L*] by infinitely high walls, with
//! some arbitrary (sampled) potential *V* inside. The walls impose
//! *ψ*(0) = *ψ*(*L*) = 0.
//!
//! Without *V*, the problem is the textbook infinite square well, whose
//! solutions
//! ```text
//!          ⎛2⎞½      ⎛n π x⎞          n² π² ħ²
//! φₙ(x) =  ⎜-⎟   sin ⎜-----⎟,    Eₙ = --------,    n = 1, 2, ...
//!          ⎝L⎠       ⎝  L  ⎠           2 m L²
//! ```
//! form a complete orthonormal set over [0, *L*] that already satisfies the
//! boundary conditions. Any solution of the full problem can therefore be
//! expanded as *ψ* = Σ *c*ₙ *φ*ₙ. Truncating the sum to the first *N* terms
//! and projecting the TISE onto each *φ*ᵢ turns it into the *N*×*N* matrix
//! eigenvalue problem
//! ```text
//! H c = E c
//! ```
//! By the variational principle, the *k*-th eigenvalue of the truncated problem
//! is an upper bound on the true *k*-th energy and converges to it from above
//! as *N* grows.
//!
//! # Matrix elements
//! Because each *φ*ₙ is an eigenfunction of the kinetic operator, the kinetic
//! part of *H* is exactly diagonal and needs no numerical work:
//! ```text
//! H[i, j] = δ[i, j] Eᵢ₊₁ + V[i, j]
//! ```
//! The potential part is an overlap integral, approximated here by a
//! left-rectangle sum over the *M* potential samples at *x*ₖ = *k* *δx*,
//! *δx* = *L* / *M*:
//! ```text
//!            L                      M-1
//! V[i, j] =  ∫ φᵢ(x) V(x) φⱼ(x) dx ≈ Σ  φᵢ(xₖ) V(xₖ) φⱼ(xₖ) δx
//!            0                      k=0
//! ```
//! The sum is symmetric in *i* and *j*, so *H* is symmetric. It is also exact
//! for constant *V* whenever *N* < *M*, by discrete orthogonality of the sine
//! basis on the sample grid. Note that the quadrature resolution is fixed by
//! the number of samples provided; a finer basis does not refine it.
//!
//! Evaluating every element directly costs *O*(*N*² *M*) sine evaluations.
//! Tabulating *φ*ᵢ(*x*ₖ) once reduces each element to a weighted dot product
//! between two rows of the table.
//!
//! # Diagonalization
//! *H* is real and symmetric, so its eigenvalues are real and its
//! eigenvectors can be chosen orthonormal. The symmetric LAPACK driver
//! returns them sorted in ascending order. The general (non-symmetric) driver
//! does not sort its output, and may return complex pairs for matrices that
//! are far from symmetric; a complex eigenvalue in this context means the
//! matrix was not a valid Hamiltonian and is reported as an error.
//!
//! Eigenvectors are only defined up to sign. To make results comparable
//! between runs, each eigenvector is flipped so that its largest component is
//! positive.
//!
//! # Units
//! Choosing a length scale *a* and substituting *x'* ≡ *x* / *a* moves a
//! factor 1/*a*² onto the kinetic term, making *ε* ≡ *ħ*²/2 *m* *a*² a
//! natural energy scale. Dividing through by *ε* gives the dimensionless TISE
//! ```text
//!     ∂²
//! - ------ ψ'(x') + V'(x') ψ'(x') = E' ψ'(x'),    V' = V / ε,  E' = E / ε
//!   ∂(x')²
//! ```
//! which corresponds to *ħ* = 1, *m* = 1/2. In these units the infinite well
//! of length *L'* = *L* / *a* has energies *n*² *π*² / *L'*².
//!
//! Items in [`units`][crate::units] (and
//! [`Config::from_units`][crate::config::Config::from_units]) handle the
//! minutiae associated with conversion to and from naturalized units.
